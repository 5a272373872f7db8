//! Schema builders
//!
//! The primary interface for the extraction phase. An extractor feeds
//! properties in discovery order; `build` freezes them in canonical order.
//!
//! # Lifecycle
//!
//! ```text
//! Empty --add--> Accumulating --add--> Accumulating
//!   |                 |
//!   +------build------+-----> Built (terminal)
//! ```
//!
//! Any `add` or `build` after `Built` fails with
//! [`SchemaError::AlreadyBuilt`].

use crate::error::SchemaError;
use crate::property::{sort_by_qualified_name, NestedPropertySchema};
use crate::schema::NestedInstanceSchema;
use wis_problems::ReplayingTypeValidationContext;

/// Position of a builder in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing added yet
    Empty,
    /// At least one property added
    Accumulating,
    /// Schema produced; builder is spent
    Built,
}

/// Sorted output of the base builder, handed to an assembly function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceParts {
    /// Problems recorded during extraction
    pub validation_problems: ReplayingTypeValidationContext,
    /// Nested properties sorted by qualified name
    pub nested_properties: Vec<NestedPropertySchema>,
}

/// Accumulator for nested properties
///
/// Richer builders own one of these and delegate nested-property handling and
/// lifecycle checks to it.
///
/// Usage:
/// ```rust
/// use wis_properties::{NestedInstanceSchema, NestedPropertySchema, QualifiedName};
/// use wis_problems::ReplayingTypeValidationContext;
///
/// let mut builder = NestedInstanceSchema::builder();
/// builder.add(NestedPropertySchema::new(QualifiedName::parse("fork")?))?;
/// builder.add(NestedPropertySchema::new(QualifiedName::parse("debug")?))?;
///
/// let _schema = builder.build(ReplayingTypeValidationContext::new())?;
/// assert!(builder.add(NestedPropertySchema::new(QualifiedName::parse("late")?)).is_err());
/// # Ok::<(), wis_properties::SchemaError>(())
/// ```
#[derive(Debug)]
pub struct InstanceSchemaBuilder {
    nested_properties: Vec<NestedPropertySchema>,
    state: BuilderState,
}

impl InstanceSchemaBuilder {
    /// Create empty builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            nested_properties: Vec::new(),
            state: BuilderState::Empty,
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Nested properties added so far, in discovery order
    #[inline]
    #[must_use]
    pub fn pending_nested(&self) -> &[NestedPropertySchema] {
        &self.nested_properties
    }

    /// Add a nested property
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    pub fn add(&mut self, property: NestedPropertySchema) -> Result<(), SchemaError> {
        self.begin_add("add")?;
        self.nested_properties.push(property);
        Ok(())
    }

    /// Check that the builder still accepts properties and mark it accumulating
    ///
    /// Owning builders call this before pushing into their own lists so the
    /// whole builder shares one lifecycle.
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    pub fn begin_add(&mut self, operation: &'static str) -> Result<(), SchemaError> {
        self.ensure_not_built(operation)?;
        self.state = BuilderState::Accumulating;
        Ok(())
    }

    fn ensure_not_built(&self, operation: &'static str) -> Result<(), SchemaError> {
        if self.state == BuilderState::Built {
            tracing::error!(operation, "schema builder used after build");
            return Err(SchemaError::already_built(operation));
        }
        Ok(())
    }

    /// Freeze the builder and hand the sorted parts to `assemble`
    ///
    /// This is the single terminal operation. The builder moves to
    /// [`BuilderState::Built`] and rejects any further use.
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if called a second time.
    pub fn build_with<S, F>(
        &mut self,
        validation_problems: ReplayingTypeValidationContext,
        assemble: F,
    ) -> Result<S, SchemaError>
    where
        F: FnOnce(InstanceParts) -> S,
    {
        self.ensure_not_built("build")?;
        self.state = BuilderState::Built;

        let nested_properties = sort_by_qualified_name(std::mem::take(&mut self.nested_properties));
        tracing::debug!(
            nested = nested_properties.len(),
            problems = validation_problems.len(),
            "built instance schema"
        );

        Ok(assemble(InstanceParts {
            validation_problems,
            nested_properties,
        }))
    }

    /// Freeze into a [`NestedInstanceSchema`]
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if called a second time.
    pub fn build(
        &mut self,
        validation_problems: ReplayingTypeValidationContext,
    ) -> Result<NestedInstanceSchema, SchemaError> {
        self.build_with(validation_problems, NestedInstanceSchema::from_parts)
    }
}

impl Default for InstanceSchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::QualifiedName;
    use crate::property::QualifiedProperty;
    use crate::schema::InstanceSchema;

    fn nested(name: &str) -> NestedPropertySchema {
        NestedPropertySchema::new(QualifiedName::parse(name).unwrap())
    }

    fn names(properties: &[NestedPropertySchema]) -> Vec<&str> {
        properties
            .iter()
            .map(|p| p.qualified_name().as_str())
            .collect()
    }

    #[test]
    fn test_builder_lifecycle_states() {
        let mut builder = InstanceSchemaBuilder::new();
        assert_eq!(builder.state(), BuilderState::Empty);

        builder.add(nested("a")).unwrap();
        assert_eq!(builder.state(), BuilderState::Accumulating);

        builder.build(ReplayingTypeValidationContext::new()).unwrap();
        assert_eq!(builder.state(), BuilderState::Built);
    }

    #[test]
    fn test_pending_keeps_discovery_order() {
        let mut builder = InstanceSchemaBuilder::new();
        builder.add(nested("b")).unwrap();
        builder.add(nested("a")).unwrap();
        assert_eq!(names(builder.pending_nested()), vec!["b", "a"]);
    }

    #[test]
    fn test_build_sorts_nested() {
        let mut builder = InstanceSchemaBuilder::new();
        for name in ["b", "a", "c"] {
            builder.add(nested(name)).unwrap();
        }

        let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();
        assert_eq!(names(schema.nested_properties()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_build_empty_builder() {
        let mut builder = InstanceSchemaBuilder::new();
        let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();
        assert!(schema.nested_properties().is_empty());
    }

    #[test]
    fn test_add_after_build_rejected() {
        let mut builder = InstanceSchemaBuilder::new();
        builder.build(ReplayingTypeValidationContext::new()).unwrap();

        assert_eq!(
            builder.add(nested("late")),
            Err(SchemaError::AlreadyBuilt { operation: "add" })
        );
    }

    #[test]
    fn test_second_build_rejected() {
        let mut builder = InstanceSchemaBuilder::new();
        builder.add(nested("a")).unwrap();
        builder.build(ReplayingTypeValidationContext::new()).unwrap();

        assert_eq!(
            builder.build(ReplayingTypeValidationContext::new()),
            Err(SchemaError::AlreadyBuilt { operation: "build" })
        );
    }

    #[test]
    fn test_build_with_custom_assembly() {
        let mut builder = InstanceSchemaBuilder::new();
        builder.add(nested("z")).unwrap();
        builder.add(nested("y")).unwrap();

        let count = builder
            .build_with(ReplayingTypeValidationContext::new(), |parts| {
                assert_eq!(names(&parts.nested_properties), vec!["y", "z"]);
                parts.nested_properties.len()
            })
            .unwrap();
        assert_eq!(count, 2);
    }
}
