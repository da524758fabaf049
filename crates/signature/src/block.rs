//! crates/signature/src/block.rs
//!
//! Per-block weak and strong hashes.

use core::num::NonZeroU32;

use checksums::RollingDigest;

/// Weak and strong hashes of one block of reference content.
///
/// The block starts at `index * block_length`; its length is the length the
/// rolling digest was computed over, which is shorter than the block length
/// only for the final block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockHash {
    index: u64,
    rolling: RollingDigest,
    strong: Vec<u8>,
}

impl BlockHash {
    pub(crate) const fn new(index: u64, rolling: RollingDigest, strong: Vec<u8>) -> Self {
        Self {
            index,
            rolling,
            strong,
        }
    }

    /// Creates a block hash from raw components (for transport reconstruction).
    #[must_use]
    pub const fn from_raw_parts(index: u64, rolling: RollingDigest, strong: Vec<u8>) -> Self {
        Self::new(index, rolling, strong)
    }

    /// Returns the zero-based index of the block within the content.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the rolling checksum digest associated with the block.
    #[inline]
    #[must_use]
    pub const fn rolling(&self) -> RollingDigest {
        self.rolling
    }

    /// Returns the packed 32-bit weak hash.
    #[inline]
    #[must_use]
    pub const fn weak(&self) -> u32 {
        self.rolling.value()
    }

    /// Returns the strong checksum bytes for the block.
    #[inline]
    #[must_use]
    pub fn strong(&self) -> &[u8] {
        &self.strong
    }

    /// Returns the number of bytes the block covers.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rolling.len()
    }

    /// Reports whether the block corresponds to an empty range.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of the block for the given block length.
    #[inline]
    #[must_use]
    pub const fn offset(&self, block_length: NonZeroU32) -> u64 {
        self.index * block_length.get() as u64
    }
}
