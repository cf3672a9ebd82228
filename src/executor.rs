//! The Parallel Executor: splits a region into overlapping chunks, scans
//! each on its own thread, and merges the per-worker results back into a
//! single ascending, deduplicated offset list.

use std::thread;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::pattern::Pattern;
use crate::scanner;

/// Scans `data` for `pattern`, choosing between the single-thread Scanner
/// and the Parallel Executor based on `config`'s threshold.<br><br>
///
/// Below `config.parallel_threshold` bytes (or when the resolved worker
/// count is 1), this runs the Scanner directly on `data` with no chunking
/// at all — there is nothing for the Executor to add at that size besides
/// thread-spawn overhead.
///
/// # Errors
/// * `ScanError::InvalidArgument` - `max_matches` is zero.
/// * `ScanError::OutOfMemory` - A result buffer could not be allocated.
/// * `ScanError::Internal` - A worker thread panicked.
pub fn scan(
    data: &[u8],
    pattern: &Pattern,
    max_matches: usize,
    config: &ScanConfig,
) -> Result<Vec<u64>, ScanError> {
    if max_matches == 0 {
        return Err(ScanError::InvalidArgument(
            "max_matches must be greater than zero".to_string(),
        ));
    }

    let pattern_bytes = pattern.as_bytes();
    let worker_count = config.resolve_worker_count();

    if data.len() < config.parallel_threshold || worker_count <= 1 {
        let mut out = new_match_buffer(max_matches)?;
        scanner::scan(data, pattern_bytes, max_matches, &mut out);
        return Ok(out);
    }

    let overlap = pattern_bytes.len().saturating_sub(1);
    let chunk_len = (data.len() + worker_count - 1) / worker_count;
    let per_worker_cap = if config.soft_cap_per_worker {
        max_matches / worker_count + 64
    } else {
        max_matches
    };

    // Logical ranges own a disjoint, contiguous slice of offsets; physical
    // ranges are what each worker actually scans, extended backward (and
    // forward) by `overlap` bytes so a match straddling a logical boundary
    // is found by whichever worker's physical range contains its full
    // `pattern.len()` bytes. The dedup rule below then accepts a match only
    // from the worker whose *logical* range contains its start offset,
    // so a match inside the overlap is never reported twice.
    let ranges: Vec<(usize, usize, usize, usize)> = (0..worker_count)
        .map(|i| {
            let logical_start = i * chunk_len;
            let logical_end = ((i + 1) * chunk_len).min(data.len());
            let physical_start = logical_start.saturating_sub(overlap);
            let physical_end = (logical_end + overlap).min(data.len());
            (logical_start, logical_end, physical_start, physical_end)
        })
        .filter(|&(logical_start, logical_end, _, _)| logical_start < logical_end)
        .collect();

    log::debug!(
        "executor: dispatching {} worker(s) over {} bytes ({} logical ranges)",
        worker_count,
        data.len(),
        ranges.len()
    );

    let results: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .iter()
            .copied()
            .map(|(logical_start, logical_end, physical_start, physical_end)| {
                scope.spawn(move || -> Result<Vec<u64>, ScanError> {
                    let slice = &data[physical_start..physical_end];
                    let mut raw = new_match_buffer(per_worker_cap)?;
                    scanner::scan(slice, pattern_bytes, per_worker_cap, &mut raw);

                    for offset in raw.iter_mut() {
                        *offset += physical_start as u64;
                    }
                    raw.retain(|&absolute| {
                        absolute >= logical_start as u64 && absolute < logical_end as u64
                    });
                    Ok(raw)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| ScanError::Internal("a worker thread panicked".to_string()))?
            })
            .collect::<Result<Vec<Vec<u64>>, ScanError>>()
    })?;

    let mut merged = new_match_buffer(max_matches)?;
    'outer: for worker_result in results {
        for offset in worker_result {
            if merged.len() == max_matches {
                break 'outer;
            }
            merged.push(offset);
        }
    }
    Ok(merged)
}

/// The initial capacity of a fresh match buffer, per spec §3/§9: capacity
/// starts small and grows geometrically up to the worker's collection cap,
/// rather than eagerly reserving the full cap (which is usually far larger
/// than the number of matches actually found, and — for a cap of
/// `usize::MAX`, this crate's own "no limit" sentinel — would always fail
/// to reserve at all).
const INITIAL_CAPACITY: usize = 4096;

fn new_match_buffer(cap: usize) -> Result<Vec<u64>, ScanError> {
    let mut out = Vec::new();
    out.try_reserve(cap.min(INITIAL_CAPACITY))
        .map_err(|_| ScanError::OutOfMemory)?;
    Ok(out)
}
