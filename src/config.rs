//! Tunable constants for the Parallel Executor, exposed as a small builder
//! rather than hardcoded — spec §9 calls both the parallel threshold and
//! the worker-count strategy implementation choices that "implementations
//! may tune, but ... must be documented".

use crate::error::ScanError;

/// Below this many bytes, [`crate::scan`] runs the Single-thread Scanner
/// directly instead of paying thread-startup overhead. Default: 256 KiB.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256 * 1024;

/// Configuration for a single scan, covering the knobs spec.md's §9 Open
/// Questions leave as implementation-defined.<br><br>
///
/// # Examples
/// ```
/// use filescan::ScanConfig;
///
/// let config = ScanConfig::default()
///     .with_worker_count(4)
///     .unwrap()
///     .with_parallel_threshold(1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub(crate) parallel_threshold: usize,
    pub(crate) worker_count: Option<usize>,
    pub(crate) soft_cap_per_worker: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_count: None,
            soft_cap_per_worker: false,
        }
    }
}

impl ScanConfig {
    /// Sets the region-length threshold above which the scan runs in
    /// parallel. Below it, a single-threaded scan is used regardless of
    /// `worker_count`.
    pub fn with_parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = bytes;
        self
    }

    /// Pins the worker count used for a parallel scan.<br><br>
    ///
    /// # Errors
    /// * `ScanError::InvalidArgument` - `threads` is zero.
    pub fn with_worker_count(mut self, threads: usize) -> Result<Self, ScanError> {
        if threads == 0 {
            return Err(ScanError::InvalidArgument(
                "the worker count must be greater than zero".to_string(),
            ));
        }
        self.worker_count = Some(threads);
        Ok(self)
    }

    /// Uses every available logical core as a worker, instead of the
    /// default of `cores - 1`.
    pub fn with_all_cores(mut self) -> Self {
        self.worker_count = Some(num_cpus::get().max(1));
        self
    }

    /// When `true`, each worker's collection cap is `max_matches / W + 64`
    /// instead of `max_matches`, trading a small, correctness-preserving
    /// risk of a worker exhausting its buffer for a smaller worst-case
    /// memory footprint of `W * max_matches` (see spec §5).
    pub fn with_soft_cap_per_worker(mut self, enabled: bool) -> Self {
        self.soft_cap_per_worker = enabled;
        self
    }

    /// Resolves the worker count to use, given the number of logical CPUs
    /// online. Always at least 1.
    pub(crate) fn resolve_worker_count(&self) -> usize {
        self.worker_count
            .unwrap_or_else(|| num_cpus::get().saturating_sub(1).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_threshold() {
        let config = ScanConfig::default();
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(config.worker_count, None);
        assert!(!config.soft_cap_per_worker);
    }

    #[test]
    fn rejects_zero_worker_count() {
        assert!(ScanConfig::default().with_worker_count(0).is_err());
    }

    #[test]
    fn pinned_worker_count_is_respected() {
        let config = ScanConfig::default().with_worker_count(3).unwrap();
        assert_eq!(config.resolve_worker_count(), 3);
    }

    #[test]
    fn default_worker_count_leaves_one_core_free() {
        let config = ScanConfig::default();
        let expected = num_cpus::get().saturating_sub(1).max(1);
        assert_eq!(config.resolve_worker_count(), expected);
    }
}
