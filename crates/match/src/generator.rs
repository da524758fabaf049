//! crates/match/src/generator.rs
//!
//! Greedy rolling-window scan that turns target content into operations.

use checksums::RollingChecksum;
use signature::ContentSignature;

use crate::index::WeakHashIndex;
use crate::script::{DeltaScript, DeltaStats, Operation};

/// Pull-based producer of the operation stream for one target.
///
/// Each call to [`next`](Iterator::next) advances the scan until it can yield
/// an operation. The window is `[offset, min(offset + block_length, len))`;
/// after a match its checksum is recomputed from scratch, otherwise it is
/// rolled by one byte, shrinking at the tail of the content.
///
/// A literal run is always followed by the block that ended it, so at most
/// one operation is held back between calls.
#[derive(Debug)]
pub struct Differ<'a> {
    content: &'a [u8],
    index: WeakHashIndex<'a>,
    block_length: usize,
    offset: usize,
    window_end: usize,
    literal_start: usize,
    rolling: RollingChecksum,
    recompute: bool,
    dirty: bool,
    pending: Option<Operation>,
    finished: bool,
    stats: DeltaStats,
}

impl<'a> Differ<'a> {
    /// Prepares a scan of `content` against `signature`.
    #[must_use]
    pub fn new(content: &'a [u8], signature: &'a ContentSignature) -> Self {
        Self::with_index(content, WeakHashIndex::build(signature))
    }

    /// Prepares a scan of `content` using an already built index.
    #[must_use]
    pub fn with_index(content: &'a [u8], index: WeakHashIndex<'a>) -> Self {
        let block_length = index.signature().block_length().get() as usize;
        Self {
            content,
            index,
            block_length,
            offset: 0,
            window_end: 0,
            literal_start: 0,
            rolling: RollingChecksum::new(),
            recompute: true,
            dirty: false,
            pending: None,
            finished: false,
            stats: DeltaStats::default(),
        }
    }

    /// Counters for the operations yielded so far.
    #[must_use]
    pub const fn stats(&self) -> DeltaStats {
        self.stats
    }

    /// Current scan position within the target.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn advance_checksum(&mut self, window_end: usize) {
        let window = &self.content[self.offset..window_end];
        if self.recompute {
            self.rolling.update_from_block(window);
            self.recompute = false;
            return;
        }

        let outgoing = self.content[self.offset - 1];
        let rolled = if window_end > self.window_end {
            self.rolling.roll(outgoing, self.content[window_end - 1])
        } else {
            self.rolling.roll_out(outgoing)
        };
        if rolled.is_err() {
            self.rolling.update_from_block(window);
        }
    }

    fn take_literal(&mut self, end: usize) -> Operation {
        let literal = self.content[self.literal_start..end].to_vec();
        self.stats.record_data(literal.len());
        logging::trace_delta!(
            start = self.literal_start,
            len = literal.len(),
            "literal run flushed"
        );
        self.dirty = false;
        Operation::Data(literal)
    }

    fn finish(&mut self) -> Option<Operation> {
        self.finished = true;
        let flushed = self.dirty.then(|| self.take_literal(self.content.len()));
        logging::trace_stats!(
            block_ops = self.stats.block_ops,
            data_ops = self.stats.data_ops,
            matched_bytes = self.stats.matched_bytes,
            literal_bytes = self.stats.literal_bytes,
            "delta scan complete"
        );
        flushed
    }
}

impl Iterator for Differ<'_> {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        if let Some(operation) = self.pending.take() {
            return Some(operation);
        }
        if self.finished {
            return None;
        }

        let len = self.content.len();
        if self.index.is_empty() && self.offset < len {
            self.offset = len;
            self.dirty = true;
        }

        while self.offset < len {
            let window_end = self.offset.saturating_add(self.block_length).min(len);
            self.advance_checksum(window_end);
            self.window_end = window_end;

            let window = &self.content[self.offset..window_end];
            let Some(block) = self.index.find_match(self.rolling.value(), window) else {
                self.dirty = true;
                self.offset += 1;
                continue;
            };

            logging::trace_scan!(offset = self.offset, block = block.index(), "block matched");
            let literal = self.dirty.then(|| self.take_literal(self.offset));
            self.stats.record_block(block.len());
            self.offset = window_end;
            self.literal_start = window_end;
            self.recompute = true;

            let matched = Operation::Block(block.index());
            return match literal {
                Some(literal) => {
                    self.pending = Some(matched);
                    Some(literal)
                }
                None => Some(matched),
            };
        }

        self.finish()
    }
}

/// Scans `content` against `signature` and collects the whole operation stream.
#[tracing::instrument(
    level = "debug",
    target = "delta_sync::delta",
    skip_all,
    fields(content_len = content.len(), blocks = signature.blocks().len())
)]
#[must_use]
pub fn generate_delta(content: &[u8], signature: &ContentSignature) -> DeltaScript {
    let mut differ = Differ::new(content, signature);
    let operations: Vec<Operation> = differ.by_ref().collect();
    DeltaScript::new(operations, differ.stats())
}
