#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Block matching, delta generation and reconstruction.
//!
//! This crate implements both halves of a delta session:
//! - [`WeakHashIndex`] buckets a [`ContentSignature`](signature::ContentSignature)
//!   by weak hash for constant-time candidate lookup
//! - [`Differ`] scans target content with a rolling checksum and yields the
//!   [`Operation`] stream; [`generate_delta`] collects it into a [`DeltaScript`]
//! - [`stream_differences`] drives a [`Differ`] into a channel for a consumer
//!   on another thread
//! - [`Reconstructor`] and [`apply_operations`] rebuild the target from the
//!   reference content and the operation stream
//!
//! # Design
//!
//! The scan is greedy and anchor-based: a window that matches a reference
//! block is consumed whole, otherwise the window slides by one byte and the
//! skipped byte joins the pending literal run. Operations carry no offsets;
//! the receiver derives its write position from the bytes written so far.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroU32;
//! use matching::{Operation, apply_operations, generate_delta};
//! use signature::{SignatureParams, generate_signature};
//!
//! let block_length = NonZeroU32::new(4).unwrap();
//! let reference = b"abcdefghijkl";
//! let target = b"abcdXXXXijkl";
//!
//! let signature = generate_signature(reference, SignatureParams::new(block_length)).unwrap();
//! let script = generate_delta(target, &signature);
//! assert_eq!(script.operations()[0], Operation::Block(0));
//!
//! let rebuilt = apply_operations(reference, block_length, script.operations(), target.len()).unwrap();
//! assert_eq!(rebuilt, target);
//! ```

mod apply;
mod generator;
mod index;
mod script;
mod session;

pub use apply::{ApplyError, Reconstructor, apply_operations};
pub use generator::{Differ, generate_delta};
pub use index::{CROWDED_BUCKET_THRESHOLD, WeakHashIndex};
pub use script::{DeltaScript, DeltaStats, Operation};
pub use session::{StreamOutcome, operation_channel, stream_differences};
