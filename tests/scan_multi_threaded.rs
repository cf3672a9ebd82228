use std::io::Write;

use filescan::{scan_with_config, Pattern, ScanConfig};

use common::*;

mod common;

#[test]
/// Tests that the Parallel Executor finds a known AOB that lands squarely
/// inside one worker's logical chunk, across several worker counts.
fn scan_multi_threaded() {
    let mut data = random_bytes(4 * 1024 * 1024);

    let target_offset = 0x200_000;
    let known = b"\x55\x48\x89\xE5\x48\x8B\x00\x00\x00\x00\x00\x8B\x04\x07\x5D\xC3\x55\x48\x89\xE5\x41\x57\x41\x56\x41\x55\x41\x54\x53\x50\x49\x89\xFE";
    data[target_offset..target_offset + known.len()].copy_from_slice(known);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let pattern = Pattern::new(known.to_vec()).unwrap();

    for workers in [2, 3, 8] {
        let config = ScanConfig::default()
            .with_parallel_threshold(1)
            .with_worker_count(workers)
            .unwrap();

        let offsets = scan_with_config(file.path(), &pattern, 16, &config).unwrap();
        assert_eq!(
            offsets,
            vec![target_offset as u64],
            "worker count {workers} missed the planted match"
        );
    }
}

#[test]
/// A match planted exactly on a chunk boundary must still be found exactly
/// once, thanks to the overlap between adjacent workers' physical ranges.
fn scan_multi_threaded_boundary_match() {
    let size = 1024 * 1024;
    let mut data = random_bytes(size);

    let workers = 8;
    let chunk_len = size / workers;
    let known = b"\x90\x90\xC3\xCC\xCC";
    let target_offset = chunk_len - 2; // straddles the worker 0 / worker 1 boundary
    data[target_offset..target_offset + known.len()].copy_from_slice(known);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let pattern = Pattern::new(known.to_vec()).unwrap();
    let config = ScanConfig::default()
        .with_parallel_threshold(1)
        .with_worker_count(workers)
        .unwrap();

    let offsets = scan_with_config(file.path(), &pattern, 16, &config).unwrap();
    assert_eq!(offsets, vec![target_offset as u64]);
}
