//! crates/match/src/session.rs
//!
//! Producer side of a session that hands operations to a consumer thread.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

use signature::ContentSignature;

use crate::generator::Differ;
use crate::script::Operation;

/// How a producer stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamOutcome {
    /// Every operation was sent.
    Completed {
        /// Operations sent.
        operations: u64,
    },
    /// The receiver was dropped before the scan finished.
    Cancelled {
        /// Operations sent before the receiver went away.
        operations: u64,
    },
}

impl StreamOutcome {
    /// Number of operations delivered to the channel.
    #[must_use]
    pub const fn operations(self) -> u64 {
        match self {
            Self::Completed { operations } | Self::Cancelled { operations } => operations,
        }
    }

    /// Returns `true` when the consumer abandoned the stream.
    #[must_use]
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Creates the operation channel for one session.
///
/// `Some(capacity)` gives a bounded channel that blocks the producer while
/// full; `None` gives an unbounded one.
#[must_use]
pub fn operation_channel(capacity: Option<usize>) -> (Sender<Operation>, Receiver<Operation>) {
    match capacity {
        Some(capacity) => bounded(capacity),
        None => unbounded(),
    }
}

/// Scans `content` against `signature`, sending each operation into `sender`.
///
/// Stops scanning as soon as a send fails because the receiver was dropped.
/// The channel closes once every sender is dropped.
#[tracing::instrument(
    level = "debug",
    target = "delta_sync::session",
    skip_all,
    fields(content_len = content.len())
)]
pub fn stream_differences(
    content: &[u8],
    signature: &ContentSignature,
    sender: &Sender<Operation>,
) -> StreamOutcome {
    let mut operations = 0u64;
    for operation in Differ::new(content, signature) {
        if sender.send(operation).is_err() {
            logging::trace_session!(operations, "receiver dropped, scan cancelled");
            return StreamOutcome::Cancelled { operations };
        }
        operations += 1;
    }

    logging::trace_session!(operations, "operation stream complete");
    StreamOutcome::Completed { operations }
}
