//! Type validation problems
//!
//! Provides [`TypeValidationProblem`], the unit of data recorded while a work
//! type's schema is extracted and later replayed into a live context.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Severity of a validation problem
///
/// Ordered from least to most severe so callers can filter with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint, never fails a build
    Advice,
    /// Deprecated or suspicious declaration
    Warning,
    /// Invalid declaration that prevents execution
    Error,
}

impl Severity {
    /// Lowercase label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advice => "advice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of a problem category
///
/// `name` is a machine-friendly slug (`missing-normalization`), `display_name`
/// is what a report shows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProblemId {
    name: String,
    display_name: String,
}

impl ProblemId {
    /// Create new problem id
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }

    /// Machine-friendly name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable name
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// A validation problem found on a work type or one of its properties
///
/// # Example
/// ```
/// use wis_problems::{ProblemId, Severity, TypeValidationProblem};
///
/// let problem = TypeValidationProblem::new(
///     ProblemId::new("missing-annotation", "Missing annotation"),
///     Severity::Error,
///     "is missing an input or output annotation",
/// )
/// .with_property("sources")
/// .with_solution("Add an input or output annotation");
///
/// assert_eq!(problem.property_name(), Some("sources"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeValidationProblem {
    id: ProblemId,
    severity: Severity,
    type_name: Option<String>,
    property_name: Option<String>,
    label: String,
    details: Option<String>,
    solutions: Vec<String>,
    documentation_link: Option<String>,
}

impl TypeValidationProblem {
    /// Create problem with the mandatory fields
    #[must_use]
    pub fn new(id: ProblemId, severity: Severity, label: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            type_name: None,
            property_name: None,
            label: label.into(),
            details: None,
            solutions: Vec::new(),
            documentation_link: None,
        }
    }

    /// Attach the work type the problem was found on
    #[inline]
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Attach the qualified name of the offending property
    #[inline]
    #[must_use]
    pub fn with_property(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = Some(property_name.into());
        self
    }

    /// Attach a longer explanation
    #[inline]
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Append a possible solution
    #[inline]
    #[must_use]
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solutions.push(solution.into());
        self
    }

    /// Attach a documentation link
    #[inline]
    #[must_use]
    pub fn with_documentation_link(mut self, link: impl Into<String>) -> Self {
        self.documentation_link = Some(link.into());
        self
    }

    /// Problem category
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ProblemId {
        &self.id
    }

    /// Severity
    #[inline]
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Work type name, if attributed
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Qualified property name, if the problem is property-scoped
    #[inline]
    #[must_use]
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// Short contextual label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Longer explanation
    #[inline]
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Suggested solutions, in the order they were added
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Documentation link
    #[inline]
    #[must_use]
    pub fn documentation_link(&self) -> Option<&str> {
        self.documentation_link.as_deref()
    }

    /// Returns true for [`Severity::Error`]
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for TypeValidationProblem {
    /// Format: `[severity] Type 'T' property 'p' label`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.severity)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " Type '{type_name}'")?;
        }
        if let Some(property) = &self.property_name {
            write!(f, " property '{property}'")?;
        }
        write!(f, " {}", self.label)
    }
}
