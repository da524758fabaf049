//! Strong checksums that confirm weak-checksum candidates.
//!
//! None of these need to resist deliberate collisions; they only need a
//! negligible chance of two distinct blocks producing the same digest.
//!
//! ```
//! use checksums::strong::{Md5, StrongDigest, Xxh3_128};
//!
//! assert_eq!(Md5::digest(b"block").len(), Md5::DIGEST_LEN);
//! assert_eq!(Xxh3_128::digest(0, b"block").len(), 16);
//! ```

mod md5;
mod xxhash;

pub use self::md5::Md5;
pub use self::xxhash::{Xxh3_128, Xxh64};

/// Streaming digest with a fixed output width.
pub trait StrongDigest: Sized {
    /// Seed type accepted by [`with_seed`](Self::with_seed).
    type Seed: Default;
    /// Finalised digest representation.
    type Digest: AsRef<[u8]> + Copy + Eq;
    /// Number of bytes produced by [`finalize`](Self::finalize).
    const DIGEST_LEN: usize;

    /// Creates a hasher primed with `seed`.
    fn with_seed(seed: Self::Seed) -> Self;

    /// Creates a hasher with the default seed.
    fn new() -> Self {
        Self::with_seed(Self::Seed::default())
    }

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> Self::Digest;

    /// One-shot digest of `data` with the default seed.
    fn digest(data: &[u8]) -> Self::Digest {
        Self::digest_with_seed(Self::Seed::default(), data)
    }

    /// One-shot digest of `data` with an explicit seed.
    fn digest_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Digest {
        let mut hasher = Self::with_seed(seed);
        hasher.update(data);
        hasher.finalize()
    }
}
