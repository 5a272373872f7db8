//! Testing utilities for WIS workspace
//!
//! Shared fixtures, a scripted extractor, and tracing setup.

#![allow(missing_docs)]

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use wis_execution::{FromWorkParts, WorkInstanceSchemaBuilder};
use wis_problems::{ProblemId, ReplayingTypeValidationContext, Severity, TypeValidationProblem};
use wis_properties::{
    FileInputPropertySchema, NestedPropertySchema, PropertySchema, QualifiedName,
    ScalarInputPropertySchema, SchemaError,
};

pub fn qualified(name: &str) -> QualifiedName {
    QualifiedName::parse(name).unwrap()
}

pub fn nested(name: &str) -> NestedPropertySchema {
    NestedPropertySchema::new(qualified(name))
}

pub fn scalar(name: &str) -> ScalarInputPropertySchema {
    ScalarInputPropertySchema::new(qualified(name))
}

pub fn file(name: &str) -> FileInputPropertySchema {
    FileInputPropertySchema::new(qualified(name))
}

pub fn problem(label: &str, severity: Severity) -> TypeValidationProblem {
    TypeValidationProblem::new(ProblemId::new("test-problem", "Test problem"), severity, label)
}

pub fn property_problem(property: &str, label: &str, severity: Severity) -> TypeValidationProblem {
    problem(label, severity).with_property(property)
}

pub fn recorded<I>(problems: I) -> ReplayingTypeValidationContext
where
    I: IntoIterator<Item = TypeValidationProblem>,
{
    problems.into_iter().collect()
}

/// Stand-in for a real property walker
///
/// Feeds a fixed list of properties to a builder in the given order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExtractor {
    properties: Vec<PropertySchema>,
    problems: Vec<TypeValidationProblem>,
}

impl ScriptedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, property: impl Into<PropertySchema>) -> Self {
        self.properties.push(property.into());
        self
    }

    #[must_use]
    pub fn with_problem(mut self, problem: TypeValidationProblem) -> Self {
        self.problems.push(problem);
        self
    }

    /// Same script with properties in reverse discovery order
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.properties.reverse();
        self
    }

    pub fn extract<S: FromWorkParts>(&self) -> Result<S, SchemaError> {
        let mut builder = WorkInstanceSchemaBuilder::<S>::new();
        for property in &self.properties {
            builder.add(property.clone())?;
        }
        builder.build(recorded(self.problems.iter().cloned()))
    }
}

/// Install a test subscriber honouring `RUST_LOG`
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
