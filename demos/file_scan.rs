/// This example demonstrates the easiest way to scan a file for a pattern.
/// The file is mapped straight off disk and the default [`ScanConfig`] picks
/// single- or multi-threaded scanning based on its size.
///
/// Threading: Automatic
/// Hits: Up to 64
use filescan::{scan, Pattern, ScanConfig};

fn main() {
    let pattern = Pattern::new(b"HTTP/1.1".to_vec()).unwrap();
    let offsets = scan("test.bin", &pattern, 64).unwrap();

    for offset in &offsets {
        println!("Found pattern at offset {:#02x}", offset);
    }
    println!("Found: {}", offsets.len());

    // Same scan, but with parallelism forced off regardless of file size.
    let config = ScanConfig::default().with_parallel_threshold(usize::MAX);
    let serial_offsets = filescan::scan_with_config("test.bin", &pattern, 64, &config).unwrap();
    assert_eq!(offsets, serial_offsets);
}
