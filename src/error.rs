//! Errors surfaced by the facade entry points.

use thiserror::Error;

use matching::ApplyError;
use signature::SignatureError;

/// Failure of a synchronization step.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyncError {
    /// Hashing the reference content failed.
    #[error("failed to hash reference content: {0}")]
    Signature(#[from] SignatureError),
    /// Replaying the operation stream failed.
    #[error("failed to reconstruct target content: {0}")]
    Apply(#[from] ApplyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_apply_errors() {
        let error = SyncError::from(ApplyError::LengthMismatch {
            expected: 4,
            actual: 2,
        });
        assert_eq!(
            error.to_string(),
            "failed to reconstruct target content: reconstructed length 2 does not match expected length 4"
        );
    }

    #[test]
    fn wraps_signature_errors() {
        let error = SyncError::from(SignatureError::TooManyBlocks(7));
        assert!(matches!(error, SyncError::Signature(_)));
    }
}
