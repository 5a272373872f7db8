//! Error types for validation reporting

use crate::problem::TypeValidationProblem;

/// Failure raised when a live validation context holds blocking problems
#[derive(Debug, thiserror::Error)]
pub enum WorkValidationError {
    /// At least one error-severity problem was reported
    #[error("validation failed with {error_count} error(s) out of {} problem(s)", .problems.len())]
    ValidationFailed {
        /// Number of error-severity problems
        error_count: usize,
        /// Every collected problem, in report order
        problems: Vec<TypeValidationProblem>,
    },
}

impl WorkValidationError {
    /// Problems carried by this error
    #[inline]
    #[must_use]
    pub fn problems(&self) -> &[TypeValidationProblem] {
        match self {
            Self::ValidationFailed { problems, .. } => problems,
        }
    }
}
