use std::io::Write;

use filescan::{scan_with_config, Pattern, ScanConfig};

use common::*;

mod common;

#[test]
/// Tests that a scan below the parallel threshold finds a known AOB planted
/// at a known offset in an otherwise-random file.
fn scan_single_threaded() {
    let mut data = random_bytes(64 * 1024);

    let target_offset = 0x1000;
    let known = b"\x55\x48\x89\xE5\x48\x8B";
    data[target_offset..target_offset + known.len()].copy_from_slice(known);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let pattern = Pattern::new(known.to_vec()).unwrap();
    let config = ScanConfig::default().with_parallel_threshold(usize::MAX);

    let offsets = scan_with_config(file.path(), &pattern, 16, &config).unwrap();
    assert_eq!(offsets, vec![target_offset as u64]);
}
