#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `delta-sync` lets two replicas that share a common ancestor converge by
//! moving only what changed. The receiver hashes its reference content into
//! fixed-length blocks, the sender scans its target content against those
//! hashes and emits an [`Operation`] stream of block reuses and literal bytes,
//! and the receiver replays the stream over its reference to rebuild the
//! target exactly.
//!
//! # Design
//!
//! The boundary is three calls, one per step:
//!
//! - [`compute_block_hashes`] on the receiver
//! - [`compute_differences`] on the sender, a lazy iterator of operations
//! - [`apply_operations`] on the receiver
//!
//! [`synchronize`] runs all three in one process, with the scan on a scoped
//! producer thread and reconstruction on the calling thread, connected by a
//! channel sized by [`SyncOptions::channel_capacity`].
//!
//! Transport, compression and persistence of the hash list or the stream are
//! left to the caller.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroU32;
//! use delta_sync::{SyncOptions, synchronize};
//!
//! let options = SyncOptions::default().with_block_length(NonZeroU32::new(2).unwrap());
//! let rebuilt = synchronize(b"some text\r\n", b"some extra text\r\n", &options).unwrap();
//! assert_eq!(rebuilt, b"some extra text\r\n");
//! ```

mod error;
mod options;
mod session;

pub use error::SyncError;
pub use options::{DEFAULT_CHANNEL_CAPACITY, SyncOptions};
pub use session::{apply_operations, compute_block_hashes, compute_differences, synchronize};

pub use checksums::{RollingChecksum, RollingDigest};
pub use logging::{LogConfig, LoggingError, Subsystem, init_tracing};
pub use matching::{ApplyError, DeltaScript, DeltaStats, Differ, Operation, StreamOutcome};
pub use signature::{
    BlockHash, BlockLayout, ContentSignature, SignatureError, StrongAlgorithm, derive_block_length,
};
