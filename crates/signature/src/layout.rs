//! crates/signature/src/layout.rs
//!
//! Division of content into fixed-length blocks, and the block sizing
//! heuristic used when the caller does not force a length.

use core::num::NonZeroU32;
use core::ops::Range;

/// Block length used for content up to `DEFAULT_BLOCK_LENGTH²` bytes.
pub const DEFAULT_BLOCK_LENGTH: u32 = 700;
/// Upper bound for derived block lengths.
pub const MAX_BLOCK_LENGTH: u32 = 1 << 17;

/// How content of a given length divides into blocks.
///
/// Every block is `block_length` bytes except the last, which holds the
/// `remainder` when the content length is not a multiple of the block length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BlockLayout {
    block_length: NonZeroU32,
    remainder: u32,
    block_count: u64,
}

impl BlockLayout {
    /// Computes the layout of `content_len` bytes split into `block_length` blocks.
    #[must_use]
    pub fn new(content_len: usize, block_length: NonZeroU32) -> Self {
        let content_len = content_len as u64;
        let block = u64::from(block_length.get());
        Self {
            block_length,
            remainder: (content_len % block) as u32,
            block_count: content_len.div_ceil(block),
        }
    }

    /// Creates a layout from raw components (for transport reconstruction).
    #[must_use]
    pub const fn from_raw_parts(block_length: NonZeroU32, remainder: u32, block_count: u64) -> Self {
        Self {
            block_length,
            remainder,
            block_count,
        }
    }

    /// Returns the block length in bytes.
    #[inline]
    #[must_use]
    pub const fn block_length(self) -> NonZeroU32 {
        self.block_length
    }

    /// Returns the trailing byte count that does not fill a complete block.
    #[inline]
    #[must_use]
    pub const fn remainder(self) -> u32 {
        self.remainder
    }

    /// Returns the number of blocks in the layout.
    #[inline]
    #[must_use]
    pub const fn block_count(self) -> u64 {
        self.block_count
    }

    /// Computes the total content length from the layout components.
    #[inline]
    #[must_use]
    pub fn content_len(self) -> u64 {
        if self.block_count == 0 {
            return 0;
        }

        let block_len = u64::from(self.block_length.get());
        if self.remainder == 0 {
            self.block_count * block_len
        } else {
            (self.block_count - 1) * block_len + u64::from(self.remainder)
        }
    }

    /// True length of block `index`, or `None` past the last block.
    #[must_use]
    pub fn block_len(self, index: u64) -> Option<usize> {
        if index >= self.block_count {
            return None;
        }
        let is_last = index + 1 == self.block_count;
        if is_last && self.remainder != 0 {
            Some(self.remainder as usize)
        } else {
            Some(self.block_length.get() as usize)
        }
    }

    /// Byte range of block `index` within the content, or `None` past the last block.
    #[must_use]
    pub fn block_range(self, index: u64) -> Option<Range<usize>> {
        let len = self.block_len(index)?;
        let start = index.checked_mul(u64::from(self.block_length.get()))?;
        let start = usize::try_from(start).ok()?;
        Some(start..start.checked_add(len)?)
    }
}

/// Picks a block length for content of `content_len` bytes.
///
/// Small content uses [`DEFAULT_BLOCK_LENGTH`]. Past that the length grows with
/// the square root of the content length, rounded down to a multiple of 8 and
/// capped at [`MAX_BLOCK_LENGTH`], so the block count grows with the square
/// root as well.
#[doc(alias = "sum_sizes_sqroot")]
#[must_use]
pub fn derive_block_length(content_len: u64) -> NonZeroU32 {
    let derived = derive_block_length_raw(content_len);
    NonZeroU32::new(derived).unwrap_or(NonZeroU32::MIN)
}

fn derive_block_length_raw(content_len: u64) -> u32 {
    let default = u64::from(DEFAULT_BLOCK_LENGTH);
    if content_len <= default.saturating_mul(default) {
        return DEFAULT_BLOCK_LENGTH;
    }

    let mut c: u64 = 1;
    let mut l = content_len;
    while l >> 2 != 0 {
        c <<= 1;
        l >>= 2;
    }

    if c >= u64::from(MAX_BLOCK_LENGTH) {
        return MAX_BLOCK_LENGTH;
    }

    let mut block_length = 0u64;
    let mut current = c;
    while current >= 8 {
        block_length |= current;
        let candidate = u128::from(block_length);
        if u128::from(content_len) < candidate.saturating_mul(candidate) {
            block_length &= !current;
        }
        current >>= 1;
    }

    block_length.max(default) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).expect("non-zero")
    }

    #[test]
    fn exact_multiple_has_no_remainder() {
        let layout = BlockLayout::new(12, len(4));
        assert_eq!(layout.block_count(), 3);
        assert_eq!(layout.remainder(), 0);
        assert_eq!(layout.block_len(2), Some(4));
        assert_eq!(layout.content_len(), 12);
    }

    #[test]
    fn trailing_block_reports_true_length() {
        let layout = BlockLayout::new(11, len(2));
        assert_eq!(layout.block_count(), 6);
        assert_eq!(layout.remainder(), 1);
        assert_eq!(layout.block_len(4), Some(2));
        assert_eq!(layout.block_len(5), Some(1));
        assert_eq!(layout.block_range(5), Some(10..11));
        assert_eq!(layout.content_len(), 11);
    }

    #[test]
    fn out_of_range_blocks_are_rejected() {
        let layout = BlockLayout::new(11, len(2));
        assert_eq!(layout.block_len(6), None);
        assert_eq!(layout.block_range(6), None);
        assert_eq!(layout.block_range(u64::MAX), None);
    }

    #[test]
    fn empty_content_has_no_blocks() {
        let layout = BlockLayout::new(0, len(700));
        assert_eq!(layout.block_count(), 0);
        assert_eq!(layout.content_len(), 0);
        assert_eq!(layout.block_len(0), None);
    }

    #[test]
    fn content_shorter_than_one_block() {
        let layout = BlockLayout::new(3, len(700));
        assert_eq!(layout.block_count(), 1);
        assert_eq!(layout.block_range(0), Some(0..3));
    }

    #[test]
    fn small_content_uses_default_length() {
        assert_eq!(derive_block_length(0).get(), DEFAULT_BLOCK_LENGTH);
        assert_eq!(derive_block_length(700 * 700).get(), DEFAULT_BLOCK_LENGTH);
    }

    #[test]
    fn derived_length_tracks_square_root() {
        let derived = derive_block_length(100 * 1024 * 1024).get();
        assert_eq!(derived % 8, 0);
        let root = (100u64 * 1024 * 1024).isqrt();
        assert!(u64::from(derived) <= root);
        assert!(u64::from(derived) + 8 > root);
    }

    #[test]
    fn derived_length_is_capped() {
        assert_eq!(derive_block_length(u64::MAX).get(), MAX_BLOCK_LENGTH);
    }
}
