//! Deferred validation
//!
//! Schema extraction runs once per work type, long before any live reporting
//! destination exists. [`ReplayingTypeValidationContext`] records what the
//! extractor finds; the frozen schema replays it on every use.

use crate::context::TypeValidationContext;
use crate::problem::TypeValidationProblem;
use serde::{Deserialize, Serialize};

/// Write-only recorder that can later replay its problems verbatim
///
/// Replay is repeatable: it clones every recorded problem into the target in
/// recording order and never drains the recorder.
///
/// # Example
/// ```
/// use wis_problems::{
///     ProblemId, ReplayingTypeValidationContext, Severity, TypeValidationContext, TypeValidationProblem,
/// };
///
/// let mut recorder = ReplayingTypeValidationContext::new();
/// recorder.visit_property_problem(
///     "sources",
///     ProblemId::new("missing-annotation", "Missing annotation"),
///     Severity::Error,
///     "is not annotated",
/// );
///
/// let mut first: Vec<TypeValidationProblem> = Vec::new();
/// let mut second: Vec<TypeValidationProblem> = Vec::new();
/// recorder.replay(None, &mut first);
/// recorder.replay(None, &mut second);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplayingTypeValidationContext {
    problems: Vec<TypeValidationProblem>,
}

impl ReplayingTypeValidationContext {
    /// Create empty recorder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded problems in recording order
    #[inline]
    #[must_use]
    pub fn problems(&self) -> &[TypeValidationProblem] {
        &self.problems
    }

    /// Number of recorded problems
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Returns true if nothing was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Replay every recorded problem into `target`
    ///
    /// When `type_name` is given, problems recorded without a type are
    /// attributed to it. Problems that already name a type keep it.
    pub fn replay(&self, type_name: Option<&str>, target: &mut dyn TypeValidationContext) {
        tracing::trace!(count = self.problems.len(), type_name, "replaying validation problems");
        for problem in &self.problems {
            let problem = match type_name {
                Some(name) if problem.type_name().is_none() => problem.clone().with_type(name),
                _ => problem.clone(),
            };
            target.visit_problem(problem);
        }
    }
}

impl TypeValidationContext for ReplayingTypeValidationContext {
    fn visit_problem(&mut self, problem: TypeValidationProblem) {
        self.problems.push(problem);
    }
}

impl FromIterator<TypeValidationProblem> for ReplayingTypeValidationContext {
    fn from_iter<I: IntoIterator<Item = TypeValidationProblem>>(iter: I) -> Self {
        Self {
            problems: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ProblemId, Severity};
    use pretty_assertions::assert_eq;

    fn problem(label: &str) -> TypeValidationProblem {
        TypeValidationProblem::new(
            ProblemId::new("test-problem", "Test problem"),
            Severity::Error,
            label,
        )
    }

    #[test]
    fn replay_preserves_order() {
        let mut recorder = ReplayingTypeValidationContext::new();
        recorder.visit_problem(problem("p1"));
        recorder.visit_problem(problem("p2"));
        recorder.visit_problem(problem("p3"));

        let mut captured: Vec<TypeValidationProblem> = Vec::new();
        recorder.replay(None, &mut captured);

        let labels: Vec<_> = captured.iter().map(TypeValidationProblem::label).collect();
        assert_eq!(labels, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn replay_keeps_duplicates() {
        let mut recorder = ReplayingTypeValidationContext::new();
        recorder.visit_problem(problem("same"));
        recorder.visit_problem(problem("same"));

        let mut captured: Vec<TypeValidationProblem> = Vec::new();
        recorder.replay(None, &mut captured);
        assert_eq!(captured.len(), 2);
    }

    #[test]
    fn replay_is_repeatable() {
        let recorder: ReplayingTypeValidationContext =
            vec![problem("p1"), problem("p2")].into_iter().collect();

        let mut first: Vec<TypeValidationProblem> = Vec::new();
        let mut second: Vec<TypeValidationProblem> = Vec::new();
        recorder.replay(None, &mut first);
        recorder.replay(None, &mut second);

        assert_eq!(first, second);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn empty_recorder_replays_nothing() {
        let recorder = ReplayingTypeValidationContext::new();
        let mut captured: Vec<TypeValidationProblem> = Vec::new();
        recorder.replay(Some("Copy"), &mut captured);
        assert!(captured.is_empty());
    }

    #[test]
    fn replay_attributes_untyped_problems() {
        let recorder: ReplayingTypeValidationContext =
            vec![problem("untyped"), problem("typed").with_type("Base")]
                .into_iter()
                .collect();

        let mut captured: Vec<TypeValidationProblem> = Vec::new();
        recorder.replay(Some("Concrete"), &mut captured);

        assert_eq!(captured[0].type_name(), Some("Concrete"));
        assert_eq!(captured[1].type_name(), Some("Base"));
        // recorder itself is untouched
        assert_eq!(recorder.problems()[0].type_name(), None);
    }
}
