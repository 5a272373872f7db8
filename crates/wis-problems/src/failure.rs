//! Stack frame relevance
//!
//! Failures reported next to validation problems carry stack traces. Frames
//! that belong to the runtime itself are noise for users and get classified
//! so reporters can fold them away.

use serde::{Deserialize, Serialize};

/// Relevance of a stack frame to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackTraceRelevance {
    /// Code written by the user
    User,
    /// Runtime, standard library or framework internals
    Runtime,
}

/// A single frame as seen by a classifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    /// Fully qualified owner (module path or type name)
    pub owner: String,
    /// Function or method name
    pub function: String,
}

impl StackFrame {
    /// Create new frame
    #[inline]
    #[must_use]
    pub fn new(owner: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            function: function.into(),
        }
    }
}

/// Decides the relevance of a frame
///
/// Returns `None` when the classifier has no opinion, letting the next
/// classifier in a chain decide.
pub trait StackTraceClassifier {
    /// Classify one frame
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance>;
}

/// Prefixes treated as runtime internals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Owner prefixes matched with `starts_with`
    pub runtime_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            runtime_prefixes: ["std::", "core::", "alloc::", "tokio::", "wis_"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Add another runtime prefix
    #[inline]
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.runtime_prefixes.push(prefix.into());
        self
    }
}

/// Marks frames owned by the runtime as [`StackTraceRelevance::Runtime`]
#[derive(Debug, Clone, Default)]
pub struct InternalRuntimeStackTraceClassifier {
    config: ClassifierConfig,
}

impl InternalRuntimeStackTraceClassifier {
    /// Create classifier with the default prefixes
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create classifier from configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    fn is_runtime_frame(&self, owner: &str) -> bool {
        self.config
            .runtime_prefixes
            .iter()
            .any(|prefix| owner.starts_with(prefix.as_str()))
    }
}

impl StackTraceClassifier for InternalRuntimeStackTraceClassifier {
    fn classify(&self, frame: &StackFrame) -> Option<StackTraceRelevance> {
        self.is_runtime_frame(&frame.owner)
            .then_some(StackTraceRelevance::Runtime)
    }
}
