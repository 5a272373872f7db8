//! Error types for property schemas and builders
//!
//! Everything here is a programmer-contract violation. Problems with the
//! declarations of a work type are not errors; they are recorded as
//! [`TypeValidationProblem`](wis_problems::TypeValidationProblem)s and
//! replayed later.

/// Invalid qualified property name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// Name is the empty string
    #[error("qualified property name cannot be empty")]
    EmptyName,

    /// Name contains an empty segment
    #[error("qualified property name '{name}' contains an empty segment")]
    EmptySegment {
        /// Offending name
        name: String,
    },

    /// Segment contains forbidden characters
    #[error("invalid segment '{segment}' in qualified property name '{name}'")]
    InvalidSegment {
        /// Offending name
        name: String,
        /// Offending segment
        segment: String,
    },
}

/// Misuse of a schema builder
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// `add` or `build` called on a builder that already produced its schema
    #[error("schema builder already built; '{operation}' is not allowed after build")]
    AlreadyBuilt {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// A property could not be described
    #[error("invalid property: {0}")]
    InvalidProperty(#[from] PropertyError),
}

impl SchemaError {
    /// Create already-built error for an operation
    #[inline]
    #[must_use]
    pub fn already_built(operation: &'static str) -> Self {
        Self::AlreadyBuilt { operation }
    }
}
