//! Immutable instance schemas
//!
//! An [`InstanceSchema`] is what extraction produces for one type: its nested
//! properties in canonical order plus the validation problems found while
//! extracting them.

use crate::builder::{InstanceParts, InstanceSchemaBuilder};
use crate::property::NestedPropertySchema;
use wis_problems::{ReplayingTypeValidationContext, TypeValidationContext};

/// Frozen schema of a type with nested properties
///
/// Implementations are immutable after construction, which makes them safe
/// to cache and share across threads.
pub trait InstanceSchema {
    /// Nested properties sorted by qualified name
    fn nested_properties(&self) -> &[NestedPropertySchema];

    /// Problems recorded during extraction
    fn validation_problems(&self) -> &ReplayingTypeValidationContext;

    /// Replay the problems encountered during extraction
    ///
    /// Every recorded problem is reported once, in recording order. Calling
    /// this repeatedly reports the same problems again.
    fn validate(&self, context: &mut dyn TypeValidationContext) {
        self.validation_problems().replay(None, context);
    }
}

/// Schema of a plain nested bean
///
/// Equality compares the sorted property list and the recorded problems, so
/// two schemas extracted in different discovery orders are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NestedInstanceSchema {
    validation_problems: ReplayingTypeValidationContext,
    nested_properties: Vec<NestedPropertySchema>,
}

impl NestedInstanceSchema {
    /// Fresh builder for this schema type
    #[inline]
    #[must_use]
    pub fn builder() -> InstanceSchemaBuilder {
        InstanceSchemaBuilder::new()
    }

    /// Assemble from already sorted parts
    #[inline]
    #[must_use]
    pub fn from_parts(parts: InstanceParts) -> Self {
        Self {
            validation_problems: parts.validation_problems,
            nested_properties: parts.nested_properties,
        }
    }
}

impl InstanceSchema for NestedInstanceSchema {
    fn nested_properties(&self) -> &[NestedPropertySchema] {
        &self.nested_properties
    }

    fn validation_problems(&self) -> &ReplayingTypeValidationContext {
        &self.validation_problems
    }
}
