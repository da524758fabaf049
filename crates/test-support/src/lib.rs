//! Shared fixtures for tests and benchmarks across the workspace.
//!
//! Every generator is seeded so failures reproduce byte-for-byte.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seed used when a test does not care which bytes it gets.
pub const DEFAULT_SEED: u64 = 0x5eed_da7a;

/// Returns `len` pseudo-random bytes derived from `seed`.
#[must_use]
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

/// Returns `len` bytes cycling through `0..251`.
///
/// The prime period keeps block boundaries from lining up with the pattern.
#[must_use]
pub fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|index| (index % 251) as u8).collect()
}

/// A reference buffer and a copy of it with scattered edits applied.
#[derive(Clone, Debug)]
pub struct EditedPair {
    /// Original content.
    pub reference: Vec<u8>,
    /// Edited content.
    pub edited: Vec<u8>,
}

/// Builds a random reference of `len` bytes and applies `edits` random edits.
///
/// Each edit inserts, deletes, or overwrites a short run at a random offset.
#[must_use]
pub fn edited_pair(seed: u64, len: usize, edits: usize) -> EditedPair {
    let reference = random_bytes(seed, len);
    let mut edited = reference.clone();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    for _ in 0..edits {
        let at = rng.gen_range(0..=edited.len());
        let run = rng.gen_range(1..=16usize);
        match rng.gen_range(0..3u8) {
            0 => {
                let inserted: Vec<u8> = (0..run).map(|_| rng.r#gen()).collect();
                edited.splice(at..at, inserted);
            }
            1 => {
                let end = (at + run).min(edited.len());
                edited.drain(at..end);
            }
            _ => {
                let end = (at + run).min(edited.len());
                for byte in &mut edited[at..end] {
                    *byte = rng.r#gen();
                }
            }
        }
    }

    EditedPair { reference, edited }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bytes_is_deterministic() {
        assert_eq!(random_bytes(7, 64), random_bytes(7, 64));
        assert_ne!(random_bytes(7, 64), random_bytes(8, 64));
    }

    #[test]
    fn ramp_wraps_at_251() {
        let data = ramp(300);
        assert_eq!(data[250], 250);
        assert_eq!(data[251], 0);
    }

    #[test]
    fn edited_pair_without_edits_is_identical() {
        let pair = edited_pair(DEFAULT_SEED, 512, 0);
        assert_eq!(pair.reference, pair.edited);
    }

    #[test]
    fn edited_pair_differs_after_edits() {
        let pair = edited_pair(DEFAULT_SEED, 4096, 8);
        assert_ne!(pair.reference, pair.edited);
    }
}
