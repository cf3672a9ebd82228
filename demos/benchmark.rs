use rand::RngCore;

use filescan::{scan_slice_with_config, Pattern, ScanConfig};

/// Size of the random data to generate.
const BLOCK_SIZE: usize = 1024 * 1024 * 512;

/// Number of scans to perform. (on different random data)
const BLOCKS: usize = 5;

/// This example benchmarks the scan performance in a single-threaded and
/// multi-threaded context.
///
/// The example generates a random data buffer, and then scans it for a
/// pattern. The scan is performed multiple times, and the total (scan-only)
/// time is measured.
fn main() {
    println!("Blocks: {} x {:#02x} bytes", BLOCKS, BLOCK_SIZE);

    let pattern = Pattern::new(vec![0x48, 0x8b]).unwrap();

    let multi = run(&pattern, ScanConfig::default());
    println!(
        "Multi-threaded: {:?} @ {:.2} GB/s",
        multi,
        get_gbps(multi, BLOCK_SIZE * BLOCKS)
    );

    let single_threaded = ScanConfig::default().with_parallel_threshold(usize::MAX);
    let single = run(&pattern, single_threaded);
    println!(
        "Single-threaded: {:?} @ {:.2} GB/s",
        single,
        get_gbps(single, BLOCK_SIZE * BLOCKS)
    );
}

fn run(pattern: &Pattern, config: ScanConfig) -> std::time::Duration {
    let mut total_time = std::time::Duration::new(0, 0);

    for _ in 0..BLOCKS {
        let data = random_bytes(BLOCK_SIZE);
        let start = std::time::Instant::now();
        scan_slice_with_config(&data, pattern, usize::MAX, &config).unwrap();
        total_time += start.elapsed();
    }

    total_time
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Gets the GB/s from a time duration and byte count.
fn get_gbps(time: std::time::Duration, bytes: usize) -> f64 {
    let bytes_per_second = bytes as f64 / time.as_secs_f64();
    bytes_per_second / 1024.0 / 1024.0 / 1024.0
}
