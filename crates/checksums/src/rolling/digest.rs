use super::checksum::RollingChecksum;

/// Snapshot of a rolling checksum over a window of known length.
///
/// The two halves are exposed separately because the rolling update needs
/// both; [`value`](Self::value) packs them into the 32-bit weak hash used as
/// an index key.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RollingDigest {
    sum1: u16,
    sum2: u16,
    len: usize,
}

impl RollingDigest {
    /// Digest of the empty window.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a digest from its components.
    #[must_use]
    pub const fn new(sum1: u16, sum2: u16, len: usize) -> Self {
        Self { sum1, sum2, len }
    }

    /// Computes the digest of `window` from scratch.
    #[must_use]
    pub fn from_bytes(window: &[u8]) -> Self {
        let mut checksum = RollingChecksum::new();
        checksum.update(window);
        checksum.digest()
    }

    /// Rebuilds a digest from a packed weak hash and the window length.
    #[must_use]
    pub const fn from_value(value: u32, len: usize) -> Self {
        Self::new((value & 0xffff) as u16, (value >> 16) as u16, len)
    }

    /// Plain byte sum modulo 2^16 (`a`).
    #[inline]
    #[must_use]
    pub const fn sum1(&self) -> u16 {
        self.sum1
    }

    /// Position-weighted sum modulo 2^16 (`b`).
    #[inline]
    #[must_use]
    pub const fn sum2(&self) -> u16 {
        self.sum2
    }

    /// Number of bytes covered by the digest.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the digest of an empty window.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed weak hash: `sum1 | sum2 << 16`.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        ((self.sum2 as u32) << 16) | self.sum1 as u32
    }
}

impl From<RollingDigest> for u32 {
    fn from(digest: RollingDigest) -> Self {
        digest.value()
    }
}
