//! crates/signature/src/parallel.rs
//!
//! Parallel block hashing using rayon.
//!
//! Blocks of in-memory content are independent, so their weak and strong
//! checksums can be computed concurrently. The resulting signature is
//! identical to the one produced by [`generate_signature`](crate::generate_signature).

use rayon::prelude::*;
use tracing::instrument;

use crate::block::BlockHash;
use crate::content::ContentSignature;
use crate::generation::{SignatureError, SignatureParams};

/// Minimum content size (in bytes) where parallel hashing is beneficial.
///
/// Below this, rayon's scheduling overhead outweighs the hashing work.
pub const PARALLEL_THRESHOLD_BYTES: usize = 256 * 1024;

/// Generates a signature computing block checksums in parallel.
///
/// # Errors
///
/// Same as [`generate_signature`](crate::generate_signature).
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use signature::{SignatureParams, generate_signature};
/// use signature::parallel::generate_signature_parallel;
///
/// let data = vec![7u8; 10_000];
/// let params = SignatureParams::new(NonZeroU32::new(512).unwrap());
///
/// let parallel = generate_signature_parallel(&data, params).unwrap();
/// let sequential = generate_signature(&data, params).unwrap();
/// assert_eq!(parallel, sequential);
/// ```
#[instrument(
    level = "debug",
    target = "delta_sync::signature",
    skip(content),
    fields(content_len = content.len(), block_length = params.block_length().get()),
    name = "generate_signature_parallel"
)]
pub fn generate_signature_parallel(
    content: &[u8],
    params: SignatureParams,
) -> Result<ContentSignature, SignatureError> {
    let layout = params.validate(content.len())?;
    let block_len = params.block_length().get() as usize;

    let blocks: Vec<BlockHash> = content
        .par_chunks(block_len)
        .enumerate()
        .map(|(index, chunk)| params.hash_block(index, chunk))
        .collect();

    logging::trace_signature!(blocks = blocks.len(), "hashed reference content in parallel");

    Ok(ContentSignature::new(
        layout,
        params.algorithm(),
        params.strong_len(),
        blocks,
    ))
}

/// Generates a signature, choosing parallel or sequential hashing by content size.
///
/// Content of at least [`PARALLEL_THRESHOLD_BYTES`] is hashed in parallel.
pub fn generate_signature_auto(
    content: &[u8],
    params: SignatureParams,
) -> Result<ContentSignature, SignatureError> {
    if content.len() >= PARALLEL_THRESHOLD_BYTES {
        generate_signature_parallel(content, params)
    } else {
        crate::generate_signature(content, params)
    }
}
