//! Work instance schemas
//!
//! Extends the nested-property schema with the two input collections an
//! execution engine reads: scalar inputs and file inputs.

use std::fmt;
use std::marker::PhantomData;

use wis_problems::ReplayingTypeValidationContext;
use wis_properties::{
    sort_by_qualified_name, BuilderState, FileInputPropertySchema, InputBehavior, InstanceSchema,
    InstanceSchemaBuilder, NestedPropertySchema, PropertyRef, PropertySchema,
    ScalarInputPropertySchema, SchemaError,
};

/// Frozen schema of a unit of work
///
/// All three property collections are sorted by qualified name. Collections
/// with no properties are empty slices.
///
/// The iterator methods return `impl Iterator`, so this trait is used through
/// generics rather than as `dyn WorkInstanceSchema`.
pub trait WorkInstanceSchema: InstanceSchema {
    /// Scalar inputs sorted by qualified name
    fn scalar_inputs(&self) -> &[ScalarInputPropertySchema];

    /// File inputs sorted by qualified name
    fn file_inputs(&self) -> &[FileInputPropertySchema];

    /// Every property: nested, then scalar, then file inputs
    fn properties(&self) -> impl Iterator<Item = PropertyRef<'_>> {
        self.nested_properties()
            .iter()
            .map(PropertyRef::Nested)
            .chain(self.scalar_inputs().iter().map(PropertyRef::ScalarInput))
            .chain(self.file_inputs().iter().map(PropertyRef::FileInput))
    }

    /// File inputs whose changes are delivered incrementally
    fn incremental_file_inputs(&self) -> impl Iterator<Item = &FileInputPropertySchema> {
        self.file_inputs()
            .iter()
            .filter(|p| p.behavior() != InputBehavior::NonIncremental)
    }
}

/// Sorted output of a work builder, handed to the concrete schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchemaParts {
    /// Problems recorded during extraction
    pub validation_problems: ReplayingTypeValidationContext,
    /// Nested properties sorted by qualified name
    pub nested_properties: Vec<NestedPropertySchema>,
    /// Scalar inputs sorted by qualified name
    pub scalar_inputs: Vec<ScalarInputPropertySchema>,
    /// File inputs sorted by qualified name
    pub file_inputs: Vec<FileInputPropertySchema>,
}

/// Concrete work schemas assemble themselves from sorted parts
pub trait FromWorkParts: Sized {
    /// Assemble the immutable schema
    fn from_parts(parts: WorkSchemaParts) -> Self;
}

/// Single-use accumulator for a work schema of type `S`
///
/// Owns an [`InstanceSchemaBuilder`] for the nested properties and lifecycle,
/// plus its own lists for scalar and file inputs.
///
/// ```rust
/// use wis_execution::{TaskSchema, WorkInstanceSchema};
/// use wis_problems::ReplayingTypeValidationContext;
/// use wis_properties::{
///     FileInputPropertySchema, QualifiedName, QualifiedProperty, ScalarInputPropertySchema,
/// };
///
/// let mut builder = TaskSchema::builder();
/// builder.add_scalar_input(ScalarInputPropertySchema::new(QualifiedName::parse("release")?))?;
/// builder.add_file_input(FileInputPropertySchema::new(QualifiedName::parse("sources")?))?;
/// builder.add_scalar_input(ScalarInputPropertySchema::new(QualifiedName::parse("debug")?))?;
///
/// let schema = builder.build(ReplayingTypeValidationContext::new())?;
/// assert_eq!(schema.scalar_inputs()[0].qualified_name().as_str(), "debug");
/// # Ok::<(), wis_properties::SchemaError>(())
/// ```
pub struct WorkInstanceSchemaBuilder<S> {
    base: InstanceSchemaBuilder,
    scalar_inputs: Vec<ScalarInputPropertySchema>,
    file_inputs: Vec<FileInputPropertySchema>,
    _schema: PhantomData<fn() -> S>,
}

impl<S> WorkInstanceSchemaBuilder<S> {
    /// Create empty builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: InstanceSchemaBuilder::new(),
            scalar_inputs: Vec::new(),
            file_inputs: Vec::new(),
            _schema: PhantomData,
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> BuilderState {
        self.base.state()
    }

    /// Add a property of any kind
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    pub fn add(&mut self, property: PropertySchema) -> Result<(), SchemaError> {
        match property {
            PropertySchema::Nested(p) => self.add_nested(p),
            PropertySchema::ScalarInput(p) => self.add_scalar_input(p),
            PropertySchema::FileInput(p) => self.add_file_input(p),
        }
    }

    /// Add a nested property
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    #[inline]
    pub fn add_nested(&mut self, property: NestedPropertySchema) -> Result<(), SchemaError> {
        self.base.add(property)
    }

    /// Add a scalar input
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    pub fn add_scalar_input(
        &mut self,
        property: ScalarInputPropertySchema,
    ) -> Result<(), SchemaError> {
        self.base.begin_add("add_scalar_input")?;
        self.scalar_inputs.push(property);
        Ok(())
    }

    /// Add a file input
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if the schema was already built.
    pub fn add_file_input(&mut self, property: FileInputPropertySchema) -> Result<(), SchemaError> {
        self.base.begin_add("add_file_input")?;
        self.file_inputs.push(property);
        Ok(())
    }

    /// Freeze the builder and hand the sorted parts to `assemble`
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if called a second time.
    pub fn build_with<F>(
        &mut self,
        validation_problems: ReplayingTypeValidationContext,
        assemble: F,
    ) -> Result<S, SchemaError>
    where
        F: FnOnce(WorkSchemaParts) -> S,
    {
        let scalar_inputs = std::mem::take(&mut self.scalar_inputs);
        let file_inputs = std::mem::take(&mut self.file_inputs);

        self.base.build_with(validation_problems, |base| {
            let scalar_inputs = sort_by_qualified_name(scalar_inputs);
            let file_inputs = sort_by_qualified_name(file_inputs);
            tracing::debug!(
                scalar = scalar_inputs.len(),
                file = file_inputs.len(),
                "built work instance schema"
            );

            assemble(WorkSchemaParts {
                validation_problems: base.validation_problems,
                nested_properties: base.nested_properties,
                scalar_inputs,
                file_inputs,
            })
        })
    }
}

impl<S: FromWorkParts> WorkInstanceSchemaBuilder<S> {
    /// Freeze into `S`
    ///
    /// # Errors
    /// [`SchemaError::AlreadyBuilt`] if called a second time.
    pub fn build(
        &mut self,
        validation_problems: ReplayingTypeValidationContext,
    ) -> Result<S, SchemaError> {
        self.build_with(validation_problems, S::from_parts)
    }
}

// Manual impl so `S` itself need not be `Debug`
impl<S> fmt::Debug for WorkInstanceSchemaBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkInstanceSchemaBuilder")
            .field("base", &self.base)
            .field("scalar_inputs", &self.scalar_inputs)
            .field("file_inputs", &self.file_inputs)
            .finish_non_exhaustive()
    }
}

impl<S> Default for WorkInstanceSchemaBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
