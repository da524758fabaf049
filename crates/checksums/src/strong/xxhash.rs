//! XXHash digests from `xxhash-rust`.
//!
//! Both are much faster than MD5 and are a good fit when the strong checksum
//! only has to guard against accidental collisions.

use super::StrongDigest;

/// Streaming XXH64 hasher producing 64-bit digests.
///
/// ```
/// use checksums::strong::Xxh64;
///
/// let mut hasher = Xxh64::new(7);
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
/// assert_eq!(hasher.finalize(), Xxh64::digest(7, b"chunk 1chunk 2"));
/// ```
#[derive(Clone)]
pub struct Xxh64 {
    inner: xxhash_rust::xxh64::Xxh64,
}

impl Xxh64 {
    /// Creates a hasher with the supplied seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: xxhash_rust::xxh64::Xxh64::new(seed),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalises the digest and returns the little-endian 64-bit output.
    #[must_use]
    pub fn finalize(self) -> [u8; 8] {
        self.inner.digest().to_le_bytes()
    }

    /// Computes the digest for `data` in one shot.
    #[must_use]
    pub fn digest(seed: u64, data: &[u8]) -> [u8; 8] {
        xxhash_rust::xxh64::xxh64(data, seed).to_le_bytes()
    }
}

impl StrongDigest for Xxh64 {
    type Seed = u64;
    type Digest = [u8; 8];
    const DIGEST_LEN: usize = 8;

    fn with_seed(seed: Self::Seed) -> Self {
        Self::new(seed)
    }

    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }

    fn finalize(self) -> Self::Digest {
        Self::finalize(self)
    }
}

/// Streaming XXH3 hasher producing 128-bit digests.
#[derive(Clone)]
pub struct Xxh3_128 {
    inner: xxhash_rust::xxh3::Xxh3,
}

impl Xxh3_128 {
    /// Creates a hasher with the supplied seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: xxhash_rust::xxh3::Xxh3::with_seed(seed),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalises the digest and returns the little-endian 128-bit output.
    #[must_use]
    pub fn finalize(self) -> [u8; 16] {
        self.inner.digest128().to_le_bytes()
    }

    /// Computes the digest for `data` in one shot.
    #[must_use]
    pub fn digest(seed: u64, data: &[u8]) -> [u8; 16] {
        xxhash_rust::xxh3::xxh3_128_with_seed(data, seed).to_le_bytes()
    }
}

impl StrongDigest for Xxh3_128 {
    type Seed = u64;
    type Digest = [u8; 16];
    const DIGEST_LEN: usize = 16;

    fn with_seed(seed: Self::Seed) -> Self {
        Self::new(seed)
    }

    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }

    fn finalize(self) -> Self::Digest {
        Self::finalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xxh64_streaming_matches_one_shot() {
        let mut hasher = Xxh64::new(42);
        hasher.update(b"ab");
        hasher.update(b"cd");
        assert_eq!(hasher.finalize(), Xxh64::digest(42, b"abcd"));
    }

    #[test]
    fn xxh3_128_streaming_matches_one_shot() {
        let mut hasher = Xxh3_128::new(9);
        hasher.update(b"block ");
        hasher.update(b"payload");
        assert_eq!(hasher.finalize(), Xxh3_128::digest(9, b"block payload"));
    }

    #[test]
    fn seeds_change_output() {
        assert_ne!(Xxh64::digest(1, b"data"), Xxh64::digest(2, b"data"));
        assert_ne!(Xxh3_128::digest(1, b"data"), Xxh3_128::digest(2, b"data"));
    }

    #[test]
    fn trait_digest_uses_default_seed() {
        assert_eq!(<Xxh64 as StrongDigest>::digest(b"x"), Xxh64::digest(0, b"x"));
    }
}
