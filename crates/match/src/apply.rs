//! crates/match/src/apply.rs
//!
//! Rebuilds target content from reference content and an operation stream.

use std::borrow::Borrow;
use std::num::NonZeroU32;

use thiserror::Error;

use signature::BlockLayout;

use crate::script::Operation;

/// Errors raised while applying an operation stream.
///
/// Either error aborts reconstruction; no partial output is returned.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ApplyError {
    /// A block operation referenced a block the reference content does not have.
    #[error("block {index} is outside the reference content ({block_count} blocks)")]
    BlockOutOfRange {
        /// Requested block index.
        index: u64,
        /// Number of blocks in the reference content.
        block_count: u64,
    },
    /// The stream produced a different number of bytes than declared.
    #[error("reconstructed length {actual} does not match expected length {expected}")]
    LengthMismatch {
        /// Declared output length.
        expected: usize,
        /// Bytes the stream produced, or would have produced on overrun.
        actual: usize,
    },
}

/// Consumer side of a session: applies operations in stream order.
///
/// The write position is the number of bytes written so far. A write that
/// would pass `expected_len` fails immediately.
#[derive(Debug)]
pub struct Reconstructor<'a> {
    reference: &'a [u8],
    layout: BlockLayout,
    output: Vec<u8>,
    expected_len: usize,
}

impl<'a> Reconstructor<'a> {
    /// Creates a reconstructor over `reference` split into `block_length` blocks.
    #[must_use]
    pub fn new(reference: &'a [u8], block_length: NonZeroU32, expected_len: usize) -> Self {
        Self {
            reference,
            layout: BlockLayout::new(reference.len(), block_length),
            output: Vec::with_capacity(expected_len),
            expected_len,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.output.len()
    }

    /// Appends the bytes contributed by `operation`.
    pub fn apply(&mut self, operation: &Operation) -> Result<(), ApplyError> {
        let bytes = match operation {
            Operation::Block(index) => {
                let range = self.layout.block_range(*index).ok_or(ApplyError::BlockOutOfRange {
                    index: *index,
                    block_count: self.layout.block_count(),
                })?;
                &self.reference[range]
            }
            Operation::Data(literal) => literal.as_slice(),
        };

        let end = self.output.len().saturating_add(bytes.len());
        if end > self.expected_len {
            return Err(ApplyError::LengthMismatch {
                expected: self.expected_len,
                actual: end,
            });
        }
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    /// Returns the rebuilt content once exactly `expected_len` bytes were written.
    pub fn finish(self) -> Result<Vec<u8>, ApplyError> {
        if self.output.len() != self.expected_len {
            return Err(ApplyError::LengthMismatch {
                expected: self.expected_len,
                actual: self.output.len(),
            });
        }
        logging::trace_apply!(len = self.output.len(), "reconstruction complete");
        Ok(self.output)
    }
}

/// Applies every operation from `operations` to `reference`.
///
/// # Errors
///
/// - [`ApplyError::BlockOutOfRange`] for an unknown block index.
/// - [`ApplyError::LengthMismatch`] when the stream over- or under-runs
///   `expected_len`.
#[tracing::instrument(
    level = "debug",
    target = "delta_sync::apply",
    skip(reference, operations),
    fields(reference_len = reference.len(), block_length = block_length.get())
)]
pub fn apply_operations<I>(
    reference: &[u8],
    block_length: NonZeroU32,
    operations: I,
    expected_len: usize,
) -> Result<Vec<u8>, ApplyError>
where
    I: IntoIterator,
    I::Item: Borrow<Operation>,
{
    let mut reconstructor = Reconstructor::new(reference, block_length, expected_len);
    for operation in operations {
        reconstructor.apply(operation.borrow())?;
    }
    reconstructor.finish()
}
