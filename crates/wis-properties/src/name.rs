//! Qualified property names
//!
//! Provides [`QualifiedName`], the dotted path that identifies a property
//! within a (possibly nested) work type, e.g. `options.compilerArgs`.

use crate::error::PropertyError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Dot-separated property path
///
/// Never empty; every segment is non-empty and free of whitespace. Segments
/// may contain any other character, so synthetic names such as `sources.$0`
/// for elements of a nested collection are valid.
///
/// Ordering compares the full dotted string. This is the canonical order of
/// every property collection in a schema.
///
/// # Examples
/// ```
/// use wis_properties::QualifiedName;
///
/// let name: QualifiedName = "options.compilerArgs".parse().unwrap();
/// assert_eq!(name.name(), "compilerArgs");
/// assert_eq!(name.parent().unwrap().as_str(), "options");
/// assert!("options..debug".parse::<QualifiedName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Separator between segments
    pub const SEPARATOR: char = '.';

    /// Parse and validate a dotted name
    ///
    /// # Errors
    /// - [`PropertyError::EmptyName`] for `""`
    /// - [`PropertyError::EmptySegment`] for `a..b`, `.a` or `a.`
    /// - [`PropertyError::InvalidSegment`] for segments containing whitespace
    pub fn parse(name: impl Into<String>) -> Result<Self, PropertyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PropertyError::EmptyName);
        }

        for segment in name.split(Self::SEPARATOR) {
            Self::check_segment(&name, segment)?;
        }

        Ok(Self(name))
    }

    fn check_segment(name: &str, segment: &str) -> Result<(), PropertyError> {
        if segment.is_empty() {
            Err(PropertyError::EmptySegment {
                name: name.to_string(),
            })
        } else if segment.contains(char::is_whitespace) {
            Err(PropertyError::InvalidSegment {
                name: name.to_string(),
                segment: segment.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Full dotted form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterator over segments from outermost to innermost
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last segment (the property's own name)
    #[must_use]
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(Self::SEPARATOR)
            .map_or(self.0.as_str(), |(_, last)| last)
    }

    /// Name of the enclosing nested property, if any
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(Self::SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// Name of a property nested under this one
    ///
    /// # Errors
    /// Returns an error if `segment` is empty, contains whitespace or
    /// contains the separator.
    pub fn child(&self, segment: &str) -> Result<Self, PropertyError> {
        let name = format!("{}{}{}", self.0, Self::SEPARATOR, segment);
        if segment.contains(Self::SEPARATOR) {
            return Err(PropertyError::InvalidSegment {
                name,
                segment: segment.to_string(),
            });
        }
        Self::check_segment(&name, segment)?;
        Ok(Self(name))
    }

    /// Returns true if `other` is nested (at any depth) under this name
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with(Self::SEPARATOR))
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QualifiedName {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QualifiedName {
    type Error = PropertyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.0
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
