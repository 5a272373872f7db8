//! Validation contexts
//!
//! [`TypeValidationContext`] is the sink every reporter implements. The
//! [`DefaultTypeValidationContext`] collects problems for a live execution and
//! decides whether they block it.

use crate::error::WorkValidationError;
use crate::problem::{ProblemId, Severity, TypeValidationProblem};

/// Sink for validation problems
///
/// Only [`visit_problem`](Self::visit_problem) is required; the helpers build
/// the common type- and property-scoped problems.
pub trait TypeValidationContext {
    /// Report one problem
    fn visit_problem(&mut self, problem: TypeValidationProblem);

    /// Report a problem about a whole work type
    fn visit_type_problem(
        &mut self,
        type_name: &str,
        id: ProblemId,
        severity: Severity,
        label: &str,
    ) {
        self.visit_problem(TypeValidationProblem::new(id, severity, label).with_type(type_name));
    }

    /// Report a problem about a single property
    fn visit_property_problem(
        &mut self,
        property_name: &str,
        id: ProblemId,
        severity: Severity,
        label: &str,
    ) {
        self.visit_problem(
            TypeValidationProblem::new(id, severity, label).with_property(property_name),
        );
    }
}

impl<C: TypeValidationContext + ?Sized> TypeValidationContext for &mut C {
    fn visit_problem(&mut self, problem: TypeValidationProblem) {
        (**self).visit_problem(problem);
    }
}

/// Plain capture, mostly useful for tests and ad-hoc reporting
impl TypeValidationContext for Vec<TypeValidationProblem> {
    fn visit_problem(&mut self, problem: TypeValidationProblem) {
        self.push(problem);
    }
}

/// Problem counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemSummary {
    /// Number of advice-level problems
    pub advice: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of errors
    pub errors: usize,
}

impl ProblemSummary {
    /// Total number of problems
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.advice + self.warnings + self.errors
    }
}

/// Live context that collects problems in arrival order
///
/// # Example
/// ```
/// use wis_problems::{DefaultTypeValidationContext, ProblemId, Severity, TypeValidationContext};
///
/// let mut context = DefaultTypeValidationContext::new();
/// context.visit_property_problem(
///     "outputDir",
///     ProblemId::new("unresolvable-path", "Unresolvable path"),
///     Severity::Error,
///     "cannot be resolved",
/// );
///
/// assert!(context.has_errors());
/// assert!(context.into_result().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTypeValidationContext {
    problems: Vec<TypeValidationProblem>,
}

impl DefaultTypeValidationContext {
    /// Create empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Problems collected so far
    #[inline]
    #[must_use]
    pub fn problems(&self) -> &[TypeValidationProblem] {
        &self.problems
    }

    /// Returns true if no problem has been collected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Returns true if any error-severity problem was collected
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.problems.iter().any(TypeValidationProblem::is_error)
    }

    /// Number of problems with the given severity
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.problems
            .iter()
            .filter(|p| p.severity() == severity)
            .count()
    }

    /// Counts per severity
    #[must_use]
    pub fn summary(&self) -> ProblemSummary {
        self.problems
            .iter()
            .fold(ProblemSummary::default(), |mut summary, p| {
                match p.severity() {
                    Severity::Advice => summary.advice += 1,
                    Severity::Warning => summary.warnings += 1,
                    Severity::Error => summary.errors += 1,
                }
                summary
            })
    }

    /// Finish validation
    ///
    /// # Errors
    /// Returns [`WorkValidationError::ValidationFailed`] if any error-severity
    /// problem was collected. Warnings and advice are returned in `Ok`.
    pub fn into_result(self) -> Result<Vec<TypeValidationProblem>, WorkValidationError> {
        let errors = self.count(Severity::Error);
        if errors == 0 {
            return Ok(self.problems);
        }

        tracing::warn!(errors, total = self.problems.len(), "work validation failed");
        Err(WorkValidationError::ValidationFailed {
            error_count: errors,
            problems: self.problems,
        })
    }
}

impl TypeValidationContext for DefaultTypeValidationContext {
    fn visit_problem(&mut self, problem: TypeValidationProblem) {
        self.problems.push(problem);
    }
}
