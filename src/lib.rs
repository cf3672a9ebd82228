//! `filescan` is a library for parallel, SIMD-accelerated byte-pattern
//! scanning over memory-mapped files.<br><br>
//!
//! A scan maps a file read-only, prefilters 16 bytes at a time against the
//! pattern's first (and, when available, second) byte using a vector
//! compare, and verifies each candidate with a second vector compare
//! against the full pattern. Files at or above a configurable size split
//! the work across a pool of overlapping chunks, one per worker thread, and
//! merge the results back in file order.<br><br>
//!
//! ```no_run
//! use filescan::{scan, Pattern};
//!
//! let pattern = Pattern::new(vec![0x48, 0x8b, 0x05])?;
//! let offsets = scan("/bin/ls", &pattern, 16)?;
//! # Ok::<(), filescan::ScanError>(())
//! ```

pub use config::ScanConfig;
pub use error::ScanError;
pub use pattern::{Pattern, PatternBuilder};

use std::path::{Path, PathBuf};

use async_scan::ScanFuture;
use region::Region;

mod async_scan;
mod config;
mod error;
mod executor;
mod pattern;
mod region;
mod scanner;
mod simd;
mod verifier;

/// Scans the file at `path` for every occurrence of `pattern`, using the
/// default [`ScanConfig`].<br><br>
///
/// # Arguments
/// * `path` - The file to scan.
/// * `pattern` - The bytes to search for.
/// * `max_matches` - The maximum number of offsets to return.
///
/// # Errors
/// See [`ScanError`].
pub fn scan(
    path: impl AsRef<Path>,
    pattern: &Pattern,
    max_matches: usize,
) -> Result<Vec<u64>, ScanError> {
    scan_with_config(path, pattern, max_matches, &ScanConfig::default())
}

/// Like [`scan`], but with an explicit [`ScanConfig`].
///
/// # Errors
/// See [`ScanError`].
pub fn scan_with_config(
    path: impl AsRef<Path>,
    pattern: &Pattern,
    max_matches: usize,
    config: &ScanConfig,
) -> Result<Vec<u64>, ScanError> {
    let path = path.as_ref();
    log::debug!("scan: opening {}", path.display());
    let region = Region::open(path)?;
    executor::scan(region.as_slice(), pattern, max_matches, config)
}

/// Scans an in-memory byte slice for every occurrence of `pattern`, using
/// the default [`ScanConfig`].<br><br>
///
/// This bypasses the Region Mapper entirely: there is no file to map, so
/// the caller's slice is scanned as-is. Useful for scanning a buffer that
/// is already resident (a decompressed blob, a captured network packet,
/// ...) without writing it to disk first.
///
/// # Errors
/// See [`ScanError`].
pub fn scan_slice(
    data: &[u8],
    pattern: &Pattern,
    max_matches: usize,
) -> Result<Vec<u64>, ScanError> {
    scan_slice_with_config(data, pattern, max_matches, &ScanConfig::default())
}

/// Like [`scan_slice`], but with an explicit [`ScanConfig`].
///
/// # Errors
/// See [`ScanError`].
pub fn scan_slice_with_config(
    data: &[u8],
    pattern: &Pattern,
    max_matches: usize,
    config: &ScanConfig,
) -> Result<Vec<u64>, ScanError> {
    executor::scan(data, pattern, max_matches, config)
}

/// Scans the file at `path` on a background thread, using the default
/// [`ScanConfig`]. The returned future resolves once, to the same result a
/// synchronous [`scan`] call would produce.
pub fn scan_async(path: impl Into<PathBuf>, pattern: Pattern, max_matches: usize) -> ScanFuture {
    scan_async_with_config(path, pattern, max_matches, ScanConfig::default())
}

/// Like [`scan_async`], but with an explicit [`ScanConfig`].
pub fn scan_async_with_config(
    path: impl Into<PathBuf>,
    pattern: Pattern,
    max_matches: usize,
    config: ScanConfig,
) -> ScanFuture {
    ScanFuture::spawn(path.into(), pattern, max_matches, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scan_finds_matches_in_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world hello").unwrap();
        file.flush().unwrap();

        let pattern = Pattern::new(b"hello".to_vec()).unwrap();
        let offsets = scan(file.path(), &pattern, 10).unwrap();
        assert_eq!(offsets, vec![0, 12]);
    }

    #[test]
    fn scan_on_missing_file_is_open_failed() {
        let pattern = Pattern::new(b"x".to_vec()).unwrap();
        let err = scan("/nonexistent/path/that/should/not/exist", &pattern, 1).unwrap_err();
        assert!(matches!(err, ScanError::OpenFailed(_)));
    }

    #[test]
    fn scan_slice_matches_in_memory_buffer() {
        let data = b"AAAA".to_vec();
        let pattern = Pattern::new(b"AA".to_vec()).unwrap();
        let offsets = scan_slice(&data, &pattern, 10).unwrap();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn scan_respects_max_matches() {
        let data = b"aaaaaaaaaa".to_vec();
        let pattern = Pattern::new(b"a".to_vec()).unwrap();
        let offsets = scan_slice(&data, &pattern, 3).unwrap();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn scan_with_config_forces_parallel_path() {
        let data = vec![b'a'; 10_000];
        let pattern = Pattern::new(b"a".to_vec()).unwrap();
        let config = ScanConfig::default()
            .with_parallel_threshold(1)
            .with_worker_count(4)
            .unwrap();

        let offsets = scan_slice_with_config(&data, &pattern, 5, &config).unwrap();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }
}
