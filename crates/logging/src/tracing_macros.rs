//! crates/logging/src/tracing_macros.rs
//! Convenience macros for subsystem-scoped tracing.
//!
//! These macros wrap the standard tracing macros with the targets listed in
//! [`Subsystem`](crate::Subsystem).

/// Emit a block hashing trace.
///
/// # Example
/// ```ignore
/// trace_signature!("hashed {} blocks", count);
/// ```
#[macro_export]
macro_rules! trace_signature {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "delta_sync::signature", $($arg)*);
    };
}

/// Emit a delta generation trace.
///
/// # Example
/// ```ignore
/// trace_delta!(offset, "literal run flushed");
/// ```
#[macro_export]
macro_rules! trace_delta {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "delta_sync::delta", $($arg)*);
    };
}

/// Emit a per-byte scan trace. Only visible at `TRACE`.
#[macro_export]
macro_rules! trace_scan {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "delta_sync::delta", $($arg)*);
    };
}

/// Emit a reconstruction trace.
///
/// # Example
/// ```ignore
/// trace_apply!("copied block {}", index);
/// ```
#[macro_export]
macro_rules! trace_apply {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "delta_sync::apply", $($arg)*);
    };
}

/// Emit a session lifecycle trace.
#[macro_export]
macro_rules! trace_session {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "delta_sync::session", $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!(literal_bytes, matched_bytes, "delta complete");
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "delta_sync::stats", $($arg)*);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_subscriber() {
        let count = 3;
        crate::trace_signature!("hashed {} blocks", count);
        crate::trace_delta!(offset = 7, "literal run flushed");
        crate::trace_scan!("window miss");
        crate::trace_apply!(index = 1, "copied block");
        crate::trace_session!("stream closed");
        crate::trace_stats!(literal_bytes = 10, "done");
    }
}
