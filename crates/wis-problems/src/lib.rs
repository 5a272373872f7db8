//! WIS Problems
//!
//! Validation problems for work types, with deferred replay.
//!
//! # Overview
//!
//! - **TypeValidationProblem**: One finding about a work type or property
//! - **TypeValidationContext**: Sink every reporter implements
//! - **ReplayingTypeValidationContext**: Records findings at extraction time, replays them later
//! - **DefaultTypeValidationContext**: Live collector deciding whether execution may proceed
//!
//! # Example
//!
//! ```rust
//! use wis_problems::{
//!     DefaultTypeValidationContext, ProblemId, ReplayingTypeValidationContext, Severity,
//!     TypeValidationContext,
//! };
//!
//! // Extraction time: no live destination yet
//! let mut recorder = ReplayingTypeValidationContext::new();
//! recorder.visit_property_problem(
//!     "destination",
//!     ProblemId::new("missing-annotation", "Missing annotation"),
//!     Severity::Warning,
//!     "is not annotated",
//! );
//!
//! // Execution time: replay into a live context
//! let mut live = DefaultTypeValidationContext::new();
//! recorder.replay(Some("CopyTask"), &mut live);
//! assert_eq!(live.problems()[0].type_name(), Some("CopyTask"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod context;
pub mod error;
pub mod failure;
pub mod problem;
pub mod replay;

// Re-exports
pub use context::{DefaultTypeValidationContext, ProblemSummary, TypeValidationContext};
pub use error::WorkValidationError;
pub use failure::{
    ClassifierConfig, InternalRuntimeStackTraceClassifier, StackFrame, StackTraceClassifier,
    StackTraceRelevance,
};
pub use problem::{ProblemId, Severity, TypeValidationProblem};
pub use replay::ReplayingTypeValidationContext;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for reporting problems
    pub use crate::{
        DefaultTypeValidationContext, ProblemId, ReplayingTypeValidationContext, Severity,
        TypeValidationContext, TypeValidationProblem,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
