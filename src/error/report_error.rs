//! Errors raised by the reporter itself.

use thiserror::Error;

/// A failure of the reporting call.
///
/// Ordinary decoding failures never produce a `ReportError`; they become report
/// lines. This type only signals that the decoding engine broke its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A validation error violated an engine invariant, e.g. an empty context trail.
    #[error("invariant violation in validation error #{index}: {reason}")]
    InvariantViolation {
        /// Position of the offending error in the decoder's error sequence.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl ReportError {
    /// Creates an invariant violation for the error at `index`.
    pub fn invariant(index: usize, reason: impl Into<String>) -> Self {
        ReportError::InvariantViolation {
            index,
            reason: reason.into(),
        }
    }

    /// Returns the same error reported against a different error position.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            ReportError::InvariantViolation { reason, .. } => {
                ReportError::InvariantViolation { index, reason }
            }
        }
    }
}
