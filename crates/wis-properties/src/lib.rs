//! WIS Properties
//!
//! Property schemas of work types and the immutable instance schemas built
//! from them.
//!
//! # Core Concepts
//!
//! - [`QualifiedName`]: Dotted property path, the canonical sort key
//! - [`PropertySchema`]: Closed union of nested, scalar-input and file-input properties
//! - [`InstanceSchema`]: Frozen, sorted nested properties plus deferred problems
//! - [`InstanceSchemaBuilder`]: Single-use accumulator enforcing canonical order at build time
//!
//! # Example
//!
//! ```rust
//! use wis_properties::{InstanceSchema, NestedInstanceSchema, NestedPropertySchema, QualifiedName};
//! use wis_problems::{ProblemId, ReplayingTypeValidationContext, Severity, TypeValidationContext};
//!
//! let mut problems = ReplayingTypeValidationContext::new();
//! problems.visit_property_problem(
//!     "retry",
//!     ProblemId::new("missing-annotation", "Missing annotation"),
//!     Severity::Warning,
//!     "is not annotated",
//! );
//!
//! let mut builder = NestedInstanceSchema::builder();
//! builder.add(NestedPropertySchema::new(QualifiedName::parse("retry")?))?;
//! builder.add(NestedPropertySchema::new(QualifiedName::parse("fork")?))?;
//! let schema = builder.build(problems)?;
//!
//! assert_eq!(schema.nested_properties()[0].bean_type(), None);
//! let mut live = wis_problems::DefaultTypeValidationContext::new();
//! schema.validate(&mut live);
//! assert_eq!(live.problems().len(), 1);
//! # Ok::<(), wis_properties::SchemaError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod builder;
mod error;
mod name;
mod property;
mod schema;

// Re-exports
pub use builder::{BuilderState, InstanceParts, InstanceSchemaBuilder};
pub use error::{PropertyError, SchemaError};
pub use name::QualifiedName;
pub use property::{
    sort_by_qualified_name, DirectorySensitivity, FileInputPropertySchema, FileNormalizer,
    InputBehavior, LineEndingSensitivity, NestedPropertySchema, PropertyKind, PropertyRef,
    PropertySchema, QualifiedProperty, ScalarInputPropertySchema,
};
pub use schema::{InstanceSchema, NestedInstanceSchema};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building schemas
    pub use crate::{
        FileInputPropertySchema, InstanceSchema, InstanceSchemaBuilder, NestedPropertySchema,
        PropertySchema, QualifiedName, QualifiedProperty, ScalarInputPropertySchema, SchemaError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
