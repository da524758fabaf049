//! Rolling checksum behaviour against its closed-form definition.
//!
//! For a window `x[0..n]`:
//!
//! ```text
//! a = sum of x[i]                 mod 2^16
//! b = sum of (n - i) * x[i]       mod 2^16
//! weak = a + (b << 16)
//!
//! roll (remove old, add new, n unchanged):
//! a' = (a - old + new)            mod 2^16
//! b' = (b - n * old + a')         mod 2^16
//! ```

use checksums::{RollingChecksum, RollingDigest};

fn closed_form(window: &[u8]) -> (u32, u32, u32) {
    let n = window.len() as u64;
    let a: u64 = window.iter().map(|&b| u64::from(b)).sum();
    let b: u64 = window
        .iter()
        .enumerate()
        .map(|(i, &byte)| (n - i as u64) * u64::from(byte))
        .sum();
    let a = (a % 65_536) as u32;
    let b = (b % 65_536) as u32;
    (a + (b << 16), a, b)
}

#[test]
fn empty_input_is_zero() {
    let mut checksum = RollingChecksum::new();
    checksum.update(b"");
    assert_eq!(checksum.value(), 0);
    assert_eq!(checksum.digest().sum1(), 0);
    assert_eq!(checksum.digest().sum2(), 0);
}

#[test]
fn ramp_fixture_matches_known_values() {
    let content = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let digest = RollingDigest::from_bytes(&content);

    assert_eq!(digest.value(), 10_813_485);
    assert_eq!(u32::from(digest.sum1()), 45);
    assert_eq!(u32::from(digest.sum2()), 165);
    assert_eq!(closed_form(&content), (10_813_485, 45, 165));
}

#[test]
fn single_byte_matches_formula() {
    for byte in [0x00, 0x01, 0x42, 0x7F, 0x80, 0xFF] {
        let digest = RollingDigest::from_bytes(&[byte]);
        let expected = (u32::from(byte) << 16) | u32::from(byte);
        assert_eq!(digest.value(), expected, "value mismatch for byte {byte:#02x}");
    }
}

#[test]
fn long_windows_match_closed_form() {
    let data: Vec<u8> = (0..70_000u32).map(|i| (i * 31 % 251) as u8).collect();
    for len in [1, 2, 700, 2048, 8192, 70_000] {
        let (weak, a, b) = closed_form(&data[..len]);
        let digest = RollingDigest::from_bytes(&data[..len]);
        assert_eq!(digest.value(), weak, "weak mismatch for len {len}");
        assert_eq!(u32::from(digest.sum1()), a);
        assert_eq!(u32::from(digest.sum2()), b);
    }
}

#[test]
fn sliding_window_full_scan() {
    let data = b"The quick brown fox jumps over the lazy dog. The quick brown fox jumps over the lazy dog.";
    let block_size = 16;

    let mut rolling = RollingChecksum::new();
    rolling.update(&data[..block_size]);

    for start in 1..=(data.len() - block_size) {
        rolling
            .roll(data[start - 1], data[start + block_size - 1])
            .expect("window is seeded");

        assert_eq!(
            rolling.value(),
            closed_form(&data[start..start + block_size]).0,
            "mismatch at offset {start}"
        );
    }
}

#[test]
fn scan_then_shrink_at_tail() {
    let data = b"0123456789abcdefghij";
    let block_size = 6;

    let mut rolling = RollingChecksum::new();
    rolling.update(&data[..block_size]);

    for start in 1..data.len() {
        let end = (start + block_size).min(data.len());
        if start + block_size <= data.len() {
            rolling.roll(data[start - 1], data[end - 1]).expect("seeded");
        } else {
            rolling.roll_out(data[start - 1]).expect("seeded");
        }
        assert_eq!(rolling.value(), closed_form(&data[start..end]).0);
        assert_eq!(rolling.len(), end - start);
    }
}
