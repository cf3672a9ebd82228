/// This example demonstrates how to keep a vector of patterns, and then scan
/// a buffer for all of them sequentially.
///
/// Threading: Automatic, per pattern
/// Hits: All
use filescan::{scan_slice, Pattern, PatternBuilder};

fn scan_batch(batch: &[Pattern], data: &[u8]) {
    for pattern in batch {
        println!("Scanning for pattern: {}", pattern);
        for offset in scan_slice(data, pattern, usize::MAX).unwrap() {
            println!("  found at offset {:#02x}", offset);
        }
    }
}

fn main() {
    let data = std::fs::read("test.bin").unwrap();

    let batch = vec![
        PatternBuilder::from_hex_string("48545450").unwrap(),
        PatternBuilder::from_hex_string("47455420").unwrap(),
        PatternBuilder::from_text("GET / HTTP/1.1").unwrap(),
    ];

    scan_batch(&batch, &data);
}
