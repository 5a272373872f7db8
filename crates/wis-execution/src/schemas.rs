//! Concrete work schemas
//!
//! Tasks and transform actions share the same shape. They are distinct types
//! so a schema extracted for one can never be mistaken for the other.

use crate::work::{FromWorkParts, WorkInstanceSchema, WorkInstanceSchemaBuilder, WorkSchemaParts};
use wis_problems::ReplayingTypeValidationContext;
use wis_properties::{
    FileInputPropertySchema, InputBehavior, InstanceSchema, NestedPropertySchema,
    ScalarInputPropertySchema,
};

/// Schema of a task type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskSchema {
    validation_problems: ReplayingTypeValidationContext,
    nested_properties: Vec<NestedPropertySchema>,
    scalar_inputs: Vec<ScalarInputPropertySchema>,
    file_inputs: Vec<FileInputPropertySchema>,
}

impl TaskSchema {
    /// Fresh builder for task schemas
    #[inline]
    #[must_use]
    pub fn builder() -> WorkInstanceSchemaBuilder<Self> {
        WorkInstanceSchemaBuilder::new()
    }

    /// File inputs that cause the task to be skipped when they are empty
    pub fn skip_when_empty_inputs(&self) -> impl Iterator<Item = &FileInputPropertySchema> {
        self.file_inputs
            .iter()
            .filter(|p| p.behavior() == InputBehavior::Primary)
    }
}

impl FromWorkParts for TaskSchema {
    fn from_parts(parts: WorkSchemaParts) -> Self {
        Self {
            validation_problems: parts.validation_problems,
            nested_properties: parts.nested_properties,
            scalar_inputs: parts.scalar_inputs,
            file_inputs: parts.file_inputs,
        }
    }
}

impl InstanceSchema for TaskSchema {
    fn nested_properties(&self) -> &[NestedPropertySchema] {
        &self.nested_properties
    }

    fn validation_problems(&self) -> &ReplayingTypeValidationContext {
        &self.validation_problems
    }
}

impl WorkInstanceSchema for TaskSchema {
    fn scalar_inputs(&self) -> &[ScalarInputPropertySchema] {
        &self.scalar_inputs
    }

    fn file_inputs(&self) -> &[FileInputPropertySchema] {
        &self.file_inputs
    }
}

/// Schema of an artifact transform action
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TransformActionSchema {
    validation_problems: ReplayingTypeValidationContext,
    nested_properties: Vec<NestedPropertySchema>,
    scalar_inputs: Vec<ScalarInputPropertySchema>,
    file_inputs: Vec<FileInputPropertySchema>,
}

impl TransformActionSchema {
    /// Fresh builder for transform action schemas
    #[inline]
    #[must_use]
    pub fn builder() -> WorkInstanceSchemaBuilder<Self> {
        WorkInstanceSchemaBuilder::new()
    }

    /// The file input carrying the artifact being transformed
    ///
    /// A transform action has at most one primary input. When several are
    /// declared the first in canonical order is returned.
    #[must_use]
    pub fn input_artifact(&self) -> Option<&FileInputPropertySchema> {
        self.file_inputs
            .iter()
            .find(|p| p.behavior() == InputBehavior::Primary)
    }
}

impl FromWorkParts for TransformActionSchema {
    fn from_parts(parts: WorkSchemaParts) -> Self {
        Self {
            validation_problems: parts.validation_problems,
            nested_properties: parts.nested_properties,
            scalar_inputs: parts.scalar_inputs,
            file_inputs: parts.file_inputs,
        }
    }
}

impl InstanceSchema for TransformActionSchema {
    fn nested_properties(&self) -> &[NestedPropertySchema] {
        &self.nested_properties
    }

    fn validation_problems(&self) -> &ReplayingTypeValidationContext {
        &self.validation_problems
    }
}

impl WorkInstanceSchema for TransformActionSchema {
    fn scalar_inputs(&self) -> &[ScalarInputPropertySchema] {
        &self.scalar_inputs
    }

    fn file_inputs(&self) -> &[FileInputPropertySchema] {
        &self.file_inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wis_problems::{ProblemId, Severity, TypeValidationContext, TypeValidationProblem};
    use wis_properties::{QualifiedName, QualifiedProperty};

    fn name(s: &str) -> QualifiedName {
        QualifiedName::parse(s).unwrap()
    }

    #[test]
    fn test_task_schema_scenario() {
        let mut builder = TaskSchema::builder();
        builder.add_scalar_input(ScalarInputPropertySchema::new(name("s2"))).unwrap();
        builder.add_nested(NestedPropertySchema::new(name("n1"))).unwrap();
        builder.add_scalar_input(ScalarInputPropertySchema::new(name("s1"))).unwrap();

        let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();
        assert_eq!(schema.nested_properties().len(), 1);
        let scalars: Vec<_> = schema
            .scalar_inputs()
            .iter()
            .map(|p| p.qualified_name().as_str())
            .collect();
        assert_eq!(scalars, vec!["s1", "s2"]);
        assert!(schema.file_inputs().is_empty());
    }

    #[test]
    fn test_default_schemas_are_empty() {
        let task = TaskSchema::default();
        assert_eq!(task.properties().count(), 0);

        let transform = TransformActionSchema::default();
        assert_eq!(transform.properties().count(), 0);
        assert!(transform.input_artifact().is_none());
    }

    #[test]
    fn test_skip_when_empty_inputs() {
        let mut builder = TaskSchema::builder();
        builder
            .add_file_input(
                FileInputPropertySchema::new(name("sources")).with_behavior(InputBehavior::Primary),
            )
            .unwrap();
        builder
            .add_file_input(FileInputPropertySchema::new(name("classpath")))
            .unwrap();

        let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();
        let skipping: Vec<_> = schema
            .skip_when_empty_inputs()
            .map(|p| p.qualified_name().as_str())
            .collect();
        assert_eq!(skipping, vec!["sources"]);
    }

    #[test]
    fn test_input_artifact_first_in_canonical_order() {
        let mut builder = TransformActionSchema::builder();
        builder
            .add_file_input(
                FileInputPropertySchema::new(name("zipped")).with_behavior(InputBehavior::Primary),
            )
            .unwrap();
        builder
            .add_file_input(
                FileInputPropertySchema::new(name("archive")).with_behavior(InputBehavior::Primary),
            )
            .unwrap();
        builder
            .add_file_input(FileInputPropertySchema::new(name("dependencies")))
            .unwrap();

        let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();
        let artifact = schema.input_artifact().unwrap();
        assert_eq!(artifact.qualified_name().as_str(), "archive");
    }

    #[test]
    fn test_validate_replays_each_time() {
        let mut recorder = ReplayingTypeValidationContext::new();
        recorder.visit_property_problem(
            "outputDir",
            ProblemId::new("missing-normalization", "Missing normalization"),
            Severity::Error,
            "has no normalization declared",
        );

        let schema = TransformActionSchema::builder().build(recorder).unwrap();

        let mut first: Vec<TypeValidationProblem> = Vec::new();
        schema.validate(&mut first);
        let mut second: Vec<TypeValidationProblem> = Vec::new();
        schema.validate(&mut second);

        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }
}
