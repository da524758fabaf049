//! crates/match/src/index.rs
//!
//! Weak-hash lookup table over a content signature.

use rustc_hash::FxHashMap;
use tracing::warn;

use signature::{BlockHash, ContentSignature};

/// Bucket size above which lookups are reported as degraded.
///
/// Every candidate in a bucket whose length fits the window costs one strong
/// hash comparison, so a crowded bucket turns each scan step linear.
pub const CROWDED_BUCKET_THRESHOLD: usize = 64;

/// Signature blocks grouped by weak hash.
///
/// Buckets hold block positions in ascending index order, so the first
/// verified candidate is always the lowest-indexed matching block.
#[derive(Clone, Debug)]
pub struct WeakHashIndex<'a> {
    signature: &'a ContentSignature,
    buckets: FxHashMap<u32, Vec<usize>>,
    largest_bucket: usize,
}

impl<'a> WeakHashIndex<'a> {
    /// Builds the lookup table for `signature`.
    #[must_use]
    pub fn build(signature: &'a ContentSignature) -> Self {
        let mut buckets: FxHashMap<u32, Vec<usize>> = FxHashMap::default();
        buckets.reserve(signature.blocks().len());
        for (position, block) in signature.blocks().iter().enumerate() {
            buckets.entry(block.weak()).or_default().push(position);
        }

        let largest_bucket = buckets.values().map(Vec::len).max().unwrap_or(0);
        if largest_bucket > CROWDED_BUCKET_THRESHOLD {
            warn!(
                target: "delta_sync::delta",
                largest_bucket,
                threshold = CROWDED_BUCKET_THRESHOLD,
                "weak hash collisions will degrade matching to linear strong checks"
            );
        }
        logging::trace_delta!(
            blocks = signature.blocks().len(),
            buckets = buckets.len(),
            largest_bucket,
            "built weak hash index"
        );

        Self {
            signature,
            buckets,
            largest_bucket,
        }
    }

    /// Returns the signature the index was built from.
    #[must_use]
    pub const fn signature(&self) -> &'a ContentSignature {
        self.signature
    }

    /// Returns `true` when the signature has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct weak hashes.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Size of the most populated bucket.
    #[must_use]
    pub const fn largest_bucket(&self) -> usize {
        self.largest_bucket
    }

    /// Block positions sharing `weak`, in ascending index order. Empty on a miss.
    #[must_use]
    pub fn lookup(&self, weak: u32) -> &[usize] {
        match self.buckets.get(&weak) {
            Some(bucket) => bucket,
            None => &[],
        }
    }

    /// Finds the first block whose weak hash, length and strong hash match `window`.
    ///
    /// The strong hash of `window` is computed only when at least one
    /// candidate has the window's length.
    #[must_use]
    pub fn find_match(&self, weak: u32, window: &[u8]) -> Option<&'a BlockHash> {
        let blocks = self.signature.blocks();
        let mut candidates = self
            .lookup(weak)
            .iter()
            .map(|&position| &blocks[position])
            .filter(|block| block.len() == window.len())
            .peekable();
        candidates.peek()?;

        let strong = self.signature.strong_hash(window);
        candidates.find(|block| block.strong() == strong.as_slice())
    }
}
