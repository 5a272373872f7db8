//! WIS Execution
//!
//! Schemas of executable work: tasks and artifact transform actions.
//!
//! # Core Concepts
//!
//! - [`WorkInstanceSchema`]: Nested properties plus scalar and file inputs, each sorted
//! - [`WorkInstanceSchemaBuilder`]: Typed, single-use builder for a concrete schema
//! - [`WorkType`]: Seam through which a work type supplies its extracted schema
//! - [`SchemaCache`]: Extract-once cache shared across threads
//!
//! # Example
//!
//! ```rust
//! use wis_execution::{TaskSchema, WorkInstanceSchema};
//! use wis_problems::{DefaultTypeValidationContext, ReplayingTypeValidationContext};
//! use wis_properties::{
//!     InstanceSchema, NestedPropertySchema, QualifiedName, ScalarInputPropertySchema,
//! };
//!
//! let mut builder = TaskSchema::builder();
//! builder.add_scalar_input(ScalarInputPropertySchema::new(QualifiedName::parse("s2")?))?;
//! builder.add_nested(NestedPropertySchema::new(QualifiedName::parse("n1")?))?;
//! builder.add_scalar_input(ScalarInputPropertySchema::new(QualifiedName::parse("s1")?))?;
//! let schema = builder.build(ReplayingTypeValidationContext::new())?;
//!
//! assert_eq!(schema.properties().count(), 3);
//! assert!(schema.file_inputs().is_empty());
//!
//! let mut live = DefaultTypeValidationContext::new();
//! schema.validate(&mut live);
//! assert!(live.is_empty());
//! # Ok::<(), wis_properties::SchemaError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod cache;
mod config;
mod error;
mod schemas;
mod work;

// Re-exports
pub use cache::{CacheStats, SchemaCache, WorkType};
pub use config::SchemaCacheConfig;
pub use error::{CacheError, ConfigError};
pub use schemas::{TaskSchema, TransformActionSchema};
pub use work::{FromWorkParts, WorkInstanceSchema, WorkInstanceSchemaBuilder, WorkSchemaParts};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for work schemas
    pub use crate::{
        SchemaCache, TaskSchema, TransformActionSchema, WorkInstanceSchema,
        WorkInstanceSchemaBuilder, WorkType,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
