//! crates/signature/src/generation.rs
//!
//! Block hash generation from in-memory content.

use core::num::{NonZeroU8, NonZeroU32, NonZeroUsize};

use thiserror::Error;
use tracing::instrument;

use checksums::RollingDigest;

use crate::algorithm::StrongAlgorithm;
use crate::block::BlockHash;
use crate::content::ContentSignature;
use crate::layout::{BlockLayout, DEFAULT_BLOCK_LENGTH};

/// Errors returned when generating block hashes.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SignatureError {
    /// Requested strong checksum length exceeds what the algorithm can provide.
    #[error("requested strong checksum length {requested} exceeds {algorithm:?} digest width")]
    DigestLengthMismatch {
        /// Strong checksum algorithm in use.
        algorithm: StrongAlgorithm,
        /// Number of bytes requested.
        requested: NonZeroUsize,
    },
    /// Number of blocks exceeded the platform's addressable range.
    #[error("content splits into {0} blocks which exceeds addressable memory")]
    TooManyBlocks(u64),
}

/// Full MD5 width; the number of strong checksum bytes kept per block by default.
const FULL_STRONG_LEN: NonZeroU8 = match NonZeroU8::new(16) {
    Some(len) => len,
    None => NonZeroU8::MAX,
};

/// Parameters shared by the receiver and sender of one session.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureParams {
    block_length: NonZeroU32,
    algorithm: StrongAlgorithm,
    strong_len: NonZeroU8,
}

impl SignatureParams {
    /// Parameters with the given block length, MD5, and full-width strong sums.
    #[must_use]
    pub const fn new(block_length: NonZeroU32) -> Self {
        Self {
            block_length,
            algorithm: StrongAlgorithm::Md5,
            strong_len: FULL_STRONG_LEN,
        }
    }

    /// Selects the strong checksum algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: StrongAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets how many strong checksum bytes are kept per block.
    #[must_use]
    pub const fn with_strong_len(mut self, strong_len: NonZeroU8) -> Self {
        self.strong_len = strong_len;
        self
    }

    /// Returns the block length.
    #[inline]
    #[must_use]
    pub const fn block_length(self) -> NonZeroU32 {
        self.block_length
    }

    /// Returns the strong checksum algorithm.
    #[inline]
    #[must_use]
    pub const fn algorithm(self) -> StrongAlgorithm {
        self.algorithm
    }

    /// Returns the strong checksum length.
    #[inline]
    #[must_use]
    pub const fn strong_len(self) -> NonZeroU8 {
        self.strong_len
    }

    pub(crate) fn validate(self, content_len: usize) -> Result<BlockLayout, SignatureError> {
        let requested = usize::from(self.strong_len.get());
        if requested > self.algorithm.digest_len() {
            return Err(SignatureError::DigestLengthMismatch {
                algorithm: self.algorithm,
                requested: NonZeroUsize::from(self.strong_len),
            });
        }

        let layout = BlockLayout::new(content_len, self.block_length);
        usize::try_from(layout.block_count())
            .map_err(|_| SignatureError::TooManyBlocks(layout.block_count()))?;
        Ok(layout)
    }

    pub(crate) fn hash_block(self, index: usize, chunk: &[u8]) -> BlockHash {
        let rolling = RollingDigest::from_bytes(chunk);
        let strong = self
            .algorithm
            .compute_truncated(chunk, usize::from(self.strong_len.get()));
        BlockHash::new(index as u64, rolling, strong)
    }
}

impl Default for SignatureParams {
    fn default() -> Self {
        Self::new(NonZeroU32::new(DEFAULT_BLOCK_LENGTH).unwrap_or(NonZeroU32::MIN))
    }
}

/// Splits `content` into blocks and hashes each one.
///
/// Block `i` covers `[i * block_length, min((i + 1) * block_length, len))`.
/// Empty content yields an empty signature.
///
/// # Errors
///
/// - [`SignatureError::DigestLengthMismatch`] when the strong length exceeds
///   the algorithm's digest width.
/// - [`SignatureError::TooManyBlocks`] if the block count cannot be addressed.
#[instrument(
    level = "debug",
    target = "delta_sync::signature",
    skip(content),
    fields(content_len = content.len(), block_length = params.block_length().get())
)]
pub fn generate_signature(
    content: &[u8],
    params: SignatureParams,
) -> Result<ContentSignature, SignatureError> {
    let layout = params.validate(content.len())?;
    let block_len = params.block_length().get() as usize;

    let blocks: Vec<BlockHash> = content
        .chunks(block_len)
        .enumerate()
        .map(|(index, chunk)| params.hash_block(index, chunk))
        .collect();

    logging::trace_signature!(
        blocks = blocks.len(),
        remainder = layout.remainder(),
        "hashed reference content"
    );

    Ok(ContentSignature::new(
        layout,
        params.algorithm(),
        params.strong_len(),
        blocks,
    ))
}
