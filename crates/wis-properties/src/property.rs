//! Property schemas
//!
//! A work type declares three kinds of properties. The set is closed, so it is
//! modelled as the [`PropertySchema`] enum over one struct per kind.
//!
//! The classification attributes on each struct (normalizer, behavior, ...)
//! are opaque here. They are carried for downstream consumers such as an
//! up-to-date checker and only take part in equality.

use crate::name::QualifiedName;
use serde::{Deserialize, Serialize};

/// Anything that sorts by qualified name
pub trait QualifiedProperty {
    /// Qualified name used as the canonical sort key
    fn qualified_name(&self) -> &QualifiedName;
}

/// Kind of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Nested bean with its own properties
    Nested,
    /// Non-file input value
    ScalarInput,
    /// File or directory input
    FileInput,
}

/// A nested bean whose properties are extracted separately
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NestedPropertySchema {
    qualified_name: QualifiedName,
    optional: bool,
    bean_type: Option<String>,
}

impl NestedPropertySchema {
    /// Create required nested property
    #[inline]
    #[must_use]
    pub fn new(qualified_name: QualifiedName) -> Self {
        Self {
            qualified_name,
            optional: false,
            bean_type: None,
        }
    }

    /// Mark property as optional
    #[inline]
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Record the declared type of the nested bean
    #[inline]
    #[must_use]
    pub fn with_bean_type(mut self, bean_type: impl Into<String>) -> Self {
        self.bean_type = Some(bean_type.into());
        self
    }

    /// Returns true if the property may be absent
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Declared bean type
    #[inline]
    #[must_use]
    pub fn bean_type(&self) -> Option<&str> {
        self.bean_type.as_deref()
    }
}

/// A non-file input such as a primitive, string or enum setting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarInputPropertySchema {
    qualified_name: QualifiedName,
    optional: bool,
    value_type: Option<String>,
}

impl ScalarInputPropertySchema {
    /// Create required scalar input
    #[inline]
    #[must_use]
    pub fn new(qualified_name: QualifiedName) -> Self {
        Self {
            qualified_name,
            optional: false,
            value_type: None,
        }
    }

    /// Mark property as optional
    #[inline]
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Record the declared value type
    #[inline]
    #[must_use]
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Returns true if the property may be absent
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Declared value type
    #[inline]
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }
}

/// How a file input takes part in incremental execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputBehavior {
    /// Any change forces full re-execution
    #[default]
    NonIncremental,
    /// Changes are reported to the work for incremental processing
    Incremental,
    /// Like incremental; when empty the work is skipped
    Primary,
}

/// Which aspect of a path is significant for fingerprinting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileNormalizer {
    /// Absolute path and content
    #[default]
    AbsolutePath,
    /// Path relative to the root of the file tree
    RelativePath,
    /// File name only
    NameOnly,
    /// Content only
    IgnoredPath,
    /// Runtime classpath semantics
    Classpath,
    /// Compile classpath (ABI) semantics
    CompileClasspath,
}

/// Whether directories themselves are significant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorySensitivity {
    /// Directories are fingerprinted like files
    #[default]
    Default,
    /// Empty directories are ignored
    IgnoreDirectories,
}

/// Whether line endings are significant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEndingSensitivity {
    /// Content is compared byte for byte
    #[default]
    Default,
    /// `\r\n` and `\n` are treated the same
    NormalizeLineEndings,
}

/// A property referring to one or more filesystem paths
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInputPropertySchema {
    qualified_name: QualifiedName,
    optional: bool,
    behavior: InputBehavior,
    normalizer: FileNormalizer,
    directory_sensitivity: DirectorySensitivity,
    line_ending_sensitivity: LineEndingSensitivity,
}

impl FileInputPropertySchema {
    /// Create required, non-incremental, absolute-path file input
    #[inline]
    #[must_use]
    pub fn new(qualified_name: QualifiedName) -> Self {
        Self {
            qualified_name,
            optional: false,
            behavior: InputBehavior::default(),
            normalizer: FileNormalizer::default(),
            directory_sensitivity: DirectorySensitivity::default(),
            line_ending_sensitivity: LineEndingSensitivity::default(),
        }
    }

    /// Mark property as optional
    #[inline]
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set incremental behavior
    #[inline]
    #[must_use]
    pub fn with_behavior(mut self, behavior: InputBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set path normalizer
    #[inline]
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: FileNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set directory sensitivity
    #[inline]
    #[must_use]
    pub fn with_directory_sensitivity(mut self, sensitivity: DirectorySensitivity) -> Self {
        self.directory_sensitivity = sensitivity;
        self
    }

    /// Set line ending sensitivity
    #[inline]
    #[must_use]
    pub fn with_line_ending_sensitivity(mut self, sensitivity: LineEndingSensitivity) -> Self {
        self.line_ending_sensitivity = sensitivity;
        self
    }

    /// Returns true if the property may be absent
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Incremental behavior
    #[inline]
    #[must_use]
    pub fn behavior(&self) -> InputBehavior {
        self.behavior
    }

    /// Path normalizer
    #[inline]
    #[must_use]
    pub fn normalizer(&self) -> FileNormalizer {
        self.normalizer
    }

    /// Directory sensitivity
    #[inline]
    #[must_use]
    pub fn directory_sensitivity(&self) -> DirectorySensitivity {
        self.directory_sensitivity
    }

    /// Line ending sensitivity
    #[inline]
    #[must_use]
    pub fn line_ending_sensitivity(&self) -> LineEndingSensitivity {
        self.line_ending_sensitivity
    }
}

impl QualifiedProperty for NestedPropertySchema {
    fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }
}

impl QualifiedProperty for ScalarInputPropertySchema {
    fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }
}

impl QualifiedProperty for FileInputPropertySchema {
    fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }
}

/// Any property of a work type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertySchema {
    /// Nested bean
    Nested(NestedPropertySchema),
    /// Scalar input
    ScalarInput(ScalarInputPropertySchema),
    /// File input
    FileInput(FileInputPropertySchema),
}

impl PropertySchema {
    /// Kind tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Nested(_) => PropertyKind::Nested,
            Self::ScalarInput(_) => PropertyKind::ScalarInput,
            Self::FileInput(_) => PropertyKind::FileInput,
        }
    }

    /// Borrowed view of this property
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> PropertyRef<'_> {
        match self {
            Self::Nested(p) => PropertyRef::Nested(p),
            Self::ScalarInput(p) => PropertyRef::ScalarInput(p),
            Self::FileInput(p) => PropertyRef::FileInput(p),
        }
    }
}

impl QualifiedProperty for PropertySchema {
    fn qualified_name(&self) -> &QualifiedName {
        match self {
            Self::Nested(p) => p.qualified_name(),
            Self::ScalarInput(p) => p.qualified_name(),
            Self::FileInput(p) => p.qualified_name(),
        }
    }
}

impl From<NestedPropertySchema> for PropertySchema {
    fn from(property: NestedPropertySchema) -> Self {
        Self::Nested(property)
    }
}

impl From<ScalarInputPropertySchema> for PropertySchema {
    fn from(property: ScalarInputPropertySchema) -> Self {
        Self::ScalarInput(property)
    }
}

impl From<FileInputPropertySchema> for PropertySchema {
    fn from(property: FileInputPropertySchema) -> Self {
        Self::FileInput(property)
    }
}

/// Borrowed [`PropertySchema`], yielded when iterating a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRef<'a> {
    /// Nested bean
    Nested(&'a NestedPropertySchema),
    /// Scalar input
    ScalarInput(&'a ScalarInputPropertySchema),
    /// File input
    FileInput(&'a FileInputPropertySchema),
}

impl PropertyRef<'_> {
    /// Kind tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Nested(_) => PropertyKind::Nested,
            Self::ScalarInput(_) => PropertyKind::ScalarInput,
            Self::FileInput(_) => PropertyKind::FileInput,
        }
    }

    /// Qualified name
    #[must_use]
    pub fn qualified_name(&self) -> &QualifiedName {
        match self {
            Self::Nested(p) => p.qualified_name(),
            Self::ScalarInput(p) => p.qualified_name(),
            Self::FileInput(p) => p.qualified_name(),
        }
    }

    /// Owned copy
    #[must_use]
    pub fn to_property(&self) -> PropertySchema {
        match self {
            Self::Nested(p) => PropertySchema::Nested((*p).clone()),
            Self::ScalarInput(p) => PropertySchema::ScalarInput((*p).clone()),
            Self::FileInput(p) => PropertySchema::FileInput((*p).clone()),
        }
    }
}

/// Stable sort by qualified name
///
/// Properties sharing a name keep their relative insertion order. The result
/// is a plain `Vec`, so equality of two sorted lists compares content in
/// canonical order and never consults the comparator.
#[must_use]
pub fn sort_by_qualified_name<P: QualifiedProperty>(mut properties: Vec<P>) -> Vec<P> {
    properties.sort_by(|a, b| a.qualified_name().cmp(b.qualified_name()));
    properties
}
