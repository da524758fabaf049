//! crates/signature/src/algorithm.rs
//!
//! Strong checksum algorithm selection for block hashing.

use checksums::strong::{Md5, Xxh3_128, Xxh64};

/// Strong checksum used to confirm weak-checksum candidates.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrongAlgorithm {
    /// MD5, 16-byte digests.
    #[default]
    Md5,
    /// XXH64 with an explicit seed, 8-byte digests.
    Xxh64 {
        /// Seed applied to the XXH64 instance.
        seed: u64,
    },
    /// XXH3/128 with an explicit seed, 16-byte digests.
    Xxh3_128 {
        /// Seed applied to the XXH3/128 instance.
        seed: u64,
    },
}

impl StrongAlgorithm {
    /// Returns the full digest width produced by the algorithm in bytes.
    #[inline]
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 | Self::Xxh3_128 { .. } => 16,
            Self::Xxh64 { .. } => 8,
        }
    }

    /// Computes a strong digest for `data`, returning the full-length output.
    #[must_use]
    pub fn compute_full(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Xxh64 { seed } => Xxh64::digest(seed, data).to_vec(),
            Self::Xxh3_128 { seed } => Xxh3_128::digest(seed, data).to_vec(),
        }
    }

    /// Computes a strong digest truncated to `len` bytes.
    ///
    /// Lengths at or above [`digest_len`](Self::digest_len) return the full digest.
    #[must_use]
    pub fn compute_truncated(self, data: &[u8], len: usize) -> Vec<u8> {
        let mut digest = self.compute_full(data);
        digest.truncate(len);
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths() {
        assert_eq!(StrongAlgorithm::Md5.digest_len(), 16);
        assert_eq!(StrongAlgorithm::Xxh64 { seed: 0 }.digest_len(), 8);
        assert_eq!(StrongAlgorithm::Xxh3_128 { seed: 0 }.digest_len(), 16);
    }

    #[test]
    fn compute_full_matches_digest_len() {
        for algorithm in [
            StrongAlgorithm::Md5,
            StrongAlgorithm::Xxh64 { seed: 3 },
            StrongAlgorithm::Xxh3_128 { seed: 3 },
        ] {
            assert_eq!(algorithm.compute_full(b"block").len(), algorithm.digest_len());
        }
    }

    #[test]
    fn truncation_keeps_prefix() {
        let full = StrongAlgorithm::Md5.compute_full(b"block");
        let truncated = StrongAlgorithm::Md5.compute_truncated(b"block", 6);
        assert_eq!(truncated, &full[..6]);
    }

    #[test]
    fn oversized_truncation_returns_full_digest() {
        let algorithm = StrongAlgorithm::Xxh64 { seed: 0 };
        assert_eq!(algorithm.compute_truncated(b"block", 32).len(), 8);
    }

    #[test]
    fn default_is_md5() {
        assert_eq!(StrongAlgorithm::default(), StrongAlgorithm::Md5);
    }
}
