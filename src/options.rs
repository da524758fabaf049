//! Session configuration.

use std::num::{NonZeroU8, NonZeroU32};

use signature::{SignatureParams, StrongAlgorithm, derive_block_length};

/// Channel capacity used by [`SyncOptions::default`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Parameters for one synchronization session.
///
/// Both replicas must agree on the block length and strong checksum settings.
///
/// ```
/// use std::num::{NonZeroU8, NonZeroU32};
/// use delta_sync::{StrongAlgorithm, SyncOptions};
///
/// let options = SyncOptions::default()
///     .with_block_length(NonZeroU32::new(1024).unwrap())
///     .with_strong_algorithm(StrongAlgorithm::Xxh64 { seed: 7 })
///     .with_strong_len(NonZeroU8::new(8).unwrap())
///     .with_channel_capacity(None);
///
/// assert_eq!(options.block_length_for(10).get(), 1024);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncOptions {
    /// Fixed block length; derived from the reference length when `None`.
    pub block_length: Option<NonZeroU32>,
    /// Strong checksum confirming weak hash hits.
    pub strong_algorithm: StrongAlgorithm,
    /// Strong checksum bytes kept per block.
    pub strong_len: Option<NonZeroU8>,
    /// Bounded channel capacity; `None` selects an unbounded channel.
    pub channel_capacity: Option<usize>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            block_length: None,
            strong_algorithm: StrongAlgorithm::default(),
            strong_len: None,
            channel_capacity: Some(DEFAULT_CHANNEL_CAPACITY),
        }
    }
}

impl SyncOptions {
    /// Forces the block length.
    #[must_use]
    pub const fn with_block_length(mut self, block_length: NonZeroU32) -> Self {
        self.block_length = Some(block_length);
        self
    }

    /// Selects the strong checksum algorithm.
    #[must_use]
    pub const fn with_strong_algorithm(mut self, algorithm: StrongAlgorithm) -> Self {
        self.strong_algorithm = algorithm;
        self
    }

    /// Truncates strong checksums to `strong_len` bytes.
    #[must_use]
    pub const fn with_strong_len(mut self, strong_len: NonZeroU8) -> Self {
        self.strong_len = Some(strong_len);
        self
    }

    /// Sets the channel capacity used by [`synchronize`](crate::synchronize).
    #[must_use]
    pub const fn with_channel_capacity(mut self, capacity: Option<usize>) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Block length used for reference content of `content_len` bytes.
    #[must_use]
    pub fn block_length_for(&self, content_len: usize) -> NonZeroU32 {
        self.block_length
            .unwrap_or_else(|| derive_block_length(content_len as u64))
    }

    /// Strong checksum width; the algorithm's full digest when unset.
    #[must_use]
    pub fn strong_len(&self) -> NonZeroU8 {
        self.strong_len.unwrap_or_else(|| {
            let full = u8::try_from(self.strong_algorithm.digest_len()).unwrap_or(u8::MAX);
            NonZeroU8::new(full).unwrap_or(NonZeroU8::MAX)
        })
    }

    pub(crate) fn signature_params(&self, content_len: usize) -> SignatureParams {
        SignatureParams::new(self.block_length_for(content_len))
            .with_algorithm(self.strong_algorithm)
            .with_strong_len(self.strong_len())
    }
}
