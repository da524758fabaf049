//! crates/match/src/script.rs
//!
//! Reconstruction operations and collected delta scripts.

use signature::BlockLayout;

/// One reconstruction instruction.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Reuse the reference block with this index, at its true length.
    Block(u64),
    /// Literal bytes absent from the reference content.
    Data(Vec<u8>),
}

impl Operation {
    /// Number of output bytes the operation contributes under `layout`.
    ///
    /// Returns `None` for a block index outside the layout.
    #[must_use]
    pub fn len_in(&self, layout: BlockLayout) -> Option<usize> {
        match self {
            Self::Block(index) => layout.block_len(*index),
            Self::Data(bytes) => Some(bytes.len()),
        }
    }

    /// Returns `true` for literal payloads.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}

/// Counters describing a generated operation stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeltaStats {
    /// Number of [`Operation::Block`] entries.
    pub block_ops: u64,
    /// Number of [`Operation::Data`] entries.
    pub data_ops: u64,
    /// Bytes covered by reused blocks.
    pub matched_bytes: u64,
    /// Bytes carried as literals.
    pub literal_bytes: u64,
}

impl DeltaStats {
    /// Total bytes the stream reconstructs.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.matched_bytes + self.literal_bytes
    }

    pub(crate) fn record_block(&mut self, len: usize) {
        self.block_ops += 1;
        self.matched_bytes += len as u64;
    }

    pub(crate) fn record_data(&mut self, len: usize) {
        self.data_ops += 1;
        self.literal_bytes += len as u64;
    }
}

/// Ordered operations that rebuild one target from its reference.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeltaScript {
    operations: Vec<Operation>,
    stats: DeltaStats,
}

impl DeltaScript {
    /// Creates a script from an operation list and its counters.
    #[must_use]
    pub fn new(operations: Vec<Operation>, stats: DeltaStats) -> Self {
        Self { operations, stats }
    }

    /// Returns the operations in stream order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Consumes the script and returns its operations.
    #[must_use]
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    /// Returns the stream counters.
    #[must_use]
    pub const fn stats(&self) -> DeltaStats {
        self.stats
    }

    /// Returns `true` when the script holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
