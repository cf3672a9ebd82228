//! The single-thread Scanner: locates all matches in a byte range using a
//! vectorized prefilter plus the [`Verifier`](crate::verifier).

use crate::simd;
use crate::verifier;

/// Scans `data` for every occurrence of `pattern`, appending absolute
/// offsets (relative to the start of `data`, i.e. relative to
/// `chunk_offset` once the caller adds it) to `out`.<br><br>
///
/// Writes at most `cap - out.len()` more offsets. Never reports an offset
/// `o` with `o + pattern.len() > data.len()`. `out` is left strictly
/// ascending by construction.
///
/// # Arguments
/// * `data` - The byte range to scan.
/// * `pattern` - The bytes to search for.
/// * `cap` - The hard limit on `out.len()` after this call returns.
/// * `out` - The buffer offsets are appended to.
pub fn scan(data: &[u8], pattern: &[u8], cap: usize, out: &mut Vec<u64>) {
    let pattern_len = pattern.len();

    if cap == 0 || out.len() >= cap || data.len() < pattern_len {
        return;
    }

    let first = pattern[0];
    let second = if pattern_len > 1 {
        Some(pattern[1])
    } else {
        None
    };

    let mut cursor = 0usize;

    // SIMD loop: 16 bytes at a time, prefiltered on the first byte (and
    // second byte, if the pattern has one) before ever calling the
    // Verifier.
    while cursor + 16 <= data.len() {
        simd::prefetch_read(data, cursor + 320);

        let mut block = [0u8; 16];
        block.copy_from_slice(&data[cursor..cursor + 16]);
        let mut mask = simd::splat_eq_mask(&block, first);

        // Only load and compare the second-byte block when the first-byte
        // mask is non-zero; a rare first byte already rules out most
        // 16-byte blocks, so this skips a load and compare on the hot path.
        if mask != 0 {
            if let Some(second) = second {
                if cursor + 17 <= data.len() {
                    let mut block2 = [0u8; 16];
                    block2.copy_from_slice(&data[cursor + 1..cursor + 17]);
                    mask &= simd::splat_eq_mask(&block2, second);
                } else {
                    // Not enough bytes left for a full second-byte block;
                    // fall through to the scalar tail instead of reading
                    // out of bounds. This only happens on the very last
                    // SIMD block of the range, so it costs nothing in the
                    // common case.
                    break;
                }
            }
        }

        while mask != 0 {
            let delta = mask.trailing_zeros() as usize;
            let position = cursor + delta;

            if position + pattern_len <= data.len() && verifier::is_match(position, data, pattern)
            {
                out.push(position as u64);
                if out.len() == cap {
                    return;
                }
            }

            mask &= mask - 1; // clear lowest set bit
        }

        cursor += 16;
    }

    // Scalar tail: everything the SIMD loop couldn't cover in a full
    // 16-byte block (and the one early-break case above).
    let limit = data.len() - pattern_len + 1;
    while cursor < limit {
        let first_ok = data[cursor] == first;
        let second_ok = second.map_or(true, |s| data[cursor + 1] == s);

        if first_ok && second_ok && verifier::is_match(cursor, data, pattern) {
            out.push(cursor as u64);
            if out.len() == cap {
                return;
            }
        }

        cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(data: &[u8], pattern: &[u8], cap: usize) -> Vec<u64> {
        let mut out = Vec::new();
        scan(data, pattern, cap, &mut out);
        out
    }

    #[test]
    fn finds_single_match() {
        assert_eq!(run(b"hello world hello", b"hello", 10), vec![0, 12]);
    }

    #[test]
    fn finds_overlapping_matches() {
        assert_eq!(run(b"AAAA", b"AA", 10), vec![0, 1, 2]);
    }

    #[test]
    fn truncates_at_cap() {
        assert_eq!(run(b"abcabcabc", b"abc", 2), vec![0, 3]);
    }

    #[test]
    fn empty_data_yields_no_matches() {
        assert_eq!(run(b"", b"x", 1), Vec::<u64>::new());
    }

    #[test]
    fn pattern_longer_than_data_yields_no_matches() {
        assert_eq!(run(b"abcde", b"abcdef", 1), Vec::<u64>::new());
    }

    #[test]
    fn single_byte_pattern() {
        assert_eq!(run(b"banana", b"a", 10), vec![1, 3, 5]);
    }

    #[test]
    fn match_at_final_valid_offset() {
        let data = b"xxxxneedle";
        assert_eq!(run(data, b"needle", 10), vec![4]);
    }

    #[test]
    fn zero_cap_yields_nothing() {
        assert_eq!(run(b"aaaa", b"a", 0), Vec::<u64>::new());
    }

    #[test]
    fn match_spanning_simd_block_boundary() {
        let mut data = vec![0u8; 32];
        let needle = b"BOUNDARYXX";
        data[14..14 + needle.len()].copy_from_slice(needle);
        assert_eq!(run(&data, needle, 10), vec![14]);
    }

    #[test]
    fn long_pattern_over_sixteen_bytes() {
        let data = b"prefix_0123456789abcdefghij_suffix";
        let pattern = b"0123456789abcdefghij";
        assert_eq!(run(data, pattern, 10), vec![7]);
    }

    #[test]
    fn preserves_append_offset_base() {
        // Confirms `out` isn't cleared: callers append a chunk's matches
        // onto a buffer that may already hold earlier results.
        let mut out = vec![999u64];
        scan(b"ab", b"ab", 10, &mut out);
        assert_eq!(out, vec![999, 0]);
    }
}
