//! Error types for layout operations.
//!
//! Neither error is fatal. [`LayoutError::InsufficientSelection`] is returned
//! before anything is mutated, so callers may treat it as a silent no-op.
//! [`LayoutError::PartialFailure`] is only produced from a completed
//! [`Outcome`](crate::Outcome), after every satisfiable change was applied.

use thiserror::Error;

/// The error type for [`LayoutEngine`](crate::LayoutEngine) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("operation needs at least {required} selected shapes, got {actual}")]
    InsufficientSelection { required: usize, actual: usize },

    #[error("{} shape(s) could not be stretched without inverting them", skipped.len())]
    PartialFailure { skipped: Vec<usize> },
}

impl LayoutError {
    /// Returns true if nothing was changed by the failed operation.
    pub fn is_no_op(&self) -> bool {
        matches!(self, LayoutError::InsufficientSelection { .. })
    }
}

/// Fails with [`LayoutError::InsufficientSelection`] when fewer than
/// `required` shapes are selected.
pub(crate) fn require_selection<T>(shapes: &[T], required: usize) -> Result<(), LayoutError> {
    if shapes.len() < required {
        return Err(LayoutError::InsufficientSelection {
            required,
            actual: shapes.len(),
        });
    }
    Ok(())
}
