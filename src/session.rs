//! Boundary operations and the in-process session driver.

use std::borrow::Borrow;
use std::num::NonZeroU32;
use std::panic;
use std::thread;

use crossbeam_channel::Receiver;
use tracing::instrument;

use matching::{Differ, Operation, Reconstructor, operation_channel, stream_differences};
use signature::ContentSignature;

use crate::error::SyncError;
use crate::options::SyncOptions;

/// Hashes `content` into the block list shared with the sender.
///
/// Large content is hashed in parallel when the `parallel` feature is enabled;
/// the result does not depend on which path ran.
pub fn compute_block_hashes(
    content: &[u8],
    options: &SyncOptions,
) -> Result<ContentSignature, SyncError> {
    let params = options.signature_params(content.len());
    #[cfg(feature = "parallel")]
    let signature = signature::parallel::generate_signature_auto(content, params)?;
    #[cfg(not(feature = "parallel"))]
    let signature = signature::generate_signature(content, params)?;
    Ok(signature)
}

/// Lazily computes the operations that rebuild `content` from the hashed reference.
#[must_use]
pub fn compute_differences<'a>(content: &'a [u8], signature: &'a ContentSignature) -> Differ<'a> {
    Differ::new(content, signature)
}

/// Rebuilds `output_len` bytes by replaying `operations` over `reference`.
///
/// `block_length` must be the length the reference was hashed with.
pub fn apply_operations<I>(
    reference: &[u8],
    operations: I,
    output_len: usize,
    block_length: NonZeroU32,
) -> Result<Vec<u8>, SyncError>
where
    I: IntoIterator,
    I::Item: Borrow<Operation>,
{
    Ok(matching::apply_operations(
        reference,
        block_length,
        operations,
        output_len,
    )?)
}

/// Runs a whole session in-process and returns the rebuilt target.
///
/// The scan runs on a scoped producer thread feeding a channel; the calling
/// thread reconstructs. If reconstruction fails the receiver is dropped,
/// which stops the producer at its next send.
#[instrument(
    level = "debug",
    target = "delta_sync::session",
    skip_all,
    fields(reference_len = reference.len(), target_len = target.len())
)]
pub fn synchronize(
    reference: &[u8],
    target: &[u8],
    options: &SyncOptions,
) -> Result<Vec<u8>, SyncError> {
    let signature = compute_block_hashes(reference, options)?;
    let block_length = signature.block_length();
    let (sender, receiver) = operation_channel(options.channel_capacity);

    thread::scope(|scope| {
        let producer = scope.spawn(|| {
            let sender = sender;
            stream_differences(target, &signature, &sender)
        });

        let rebuilt = consume(reference, block_length, receiver, target.len());

        let outcome = match producer.join() {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        };
        logging::trace_session!(
            operations = outcome.operations(),
            cancelled = outcome.is_cancelled(),
            "producer finished"
        );
        rebuilt
    })
}

fn consume(
    reference: &[u8],
    block_length: NonZeroU32,
    receiver: Receiver<Operation>,
    output_len: usize,
) -> Result<Vec<u8>, SyncError> {
    let mut reconstructor = Reconstructor::new(reference, block_length, output_len);
    for operation in receiver {
        reconstructor.apply(&operation)?;
    }
    Ok(reconstructor.finish()?)
}
