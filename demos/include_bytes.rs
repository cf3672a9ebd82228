/// This example demonstrates how to use the `include_bytes` macro to embed a
/// file into your binary, and then scan the resident buffer directly with
/// [`scan_slice`] rather than mapping a file.
///
/// Threading: Single-threaded
/// Hits: All
use filescan::{scan_slice, Pattern};

fn main() {
    let data = include_bytes!("test.bin");

    let pattern = Pattern::new(b"GET".to_vec()).unwrap();
    let offsets = scan_slice(data, &pattern, usize::MAX).unwrap();

    for offset in &offsets {
        println!("Found pattern at offset {:#02x}", offset);
    }
    println!("Found: {}", offsets.len());
}
