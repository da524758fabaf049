//! crates/signature/src/content.rs
//!
//! The hash list shared by the receiver, together with the parameters
//! needed to interpret it.

use core::num::{NonZeroU8, NonZeroU32};

use crate::algorithm::StrongAlgorithm;
use crate::block::BlockHash;
use crate::layout::BlockLayout;

/// Ordered block hashes of one piece of reference content.
///
/// Produced by [`crate::generate_signature`]; read-only afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentSignature {
    layout: BlockLayout,
    algorithm: StrongAlgorithm,
    strong_len: NonZeroU8,
    blocks: Vec<BlockHash>,
}

impl ContentSignature {
    pub(crate) const fn new(
        layout: BlockLayout,
        algorithm: StrongAlgorithm,
        strong_len: NonZeroU8,
        blocks: Vec<BlockHash>,
    ) -> Self {
        Self {
            layout,
            algorithm,
            strong_len,
            blocks,
        }
    }

    /// Creates a signature from raw components (for transport reconstruction).
    #[must_use]
    pub const fn from_raw_parts(
        layout: BlockLayout,
        algorithm: StrongAlgorithm,
        strong_len: NonZeroU8,
        blocks: Vec<BlockHash>,
    ) -> Self {
        Self::new(layout, algorithm, strong_len, blocks)
    }

    /// Returns the layout of the hashed content.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// Returns the block length the content was split with.
    #[inline]
    #[must_use]
    pub const fn block_length(&self) -> NonZeroU32 {
        self.layout.block_length()
    }

    /// Returns the strong checksum algorithm.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> StrongAlgorithm {
        self.algorithm
    }

    /// Returns the number of strong checksum bytes kept per block.
    #[inline]
    #[must_use]
    pub const fn strong_len(&self) -> NonZeroU8 {
        self.strong_len
    }

    /// Returns the block hashes in ascending index order.
    #[inline]
    #[must_use]
    pub fn blocks(&self) -> &[BlockHash] {
        &self.blocks
    }

    /// Returns `true` when the hashed content was empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Strong checksum of `window`, computed the same way as the stored block checksums.
    #[must_use]
    pub fn strong_hash(&self, window: &[u8]) -> Vec<u8> {
        self.algorithm
            .compute_truncated(window, usize::from(self.strong_len.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{SignatureParams, generate_signature};

    #[test]
    fn strong_hash_matches_stored_block() {
        let params = SignatureParams::new(NonZeroU32::new(4).unwrap())
            .with_strong_len(NonZeroU8::new(6).unwrap());
        let signature = generate_signature(b"abcdefgh", params).expect("signature");

        assert_eq!(signature.strong_hash(b"efgh"), signature.blocks()[1].strong());
        assert_eq!(signature.strong_hash(b"efgh").len(), 6);
    }

    #[test]
    fn empty_signature() {
        let signature = ContentSignature::from_raw_parts(
            BlockLayout::new(0, NonZeroU32::new(16).unwrap()),
            StrongAlgorithm::Md5,
            NonZeroU8::new(16).unwrap(),
            Vec::new(),
        );
        assert!(signature.is_empty());
        assert_eq!(signature.block_length().get(), 16);
    }
}
