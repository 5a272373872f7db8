//! Error types for schema caching and configuration

use std::sync::Arc;
use wis_properties::SchemaError;

/// Errors returned by [`SchemaCache`](crate::SchemaCache)
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// Extraction of the work type's schema failed; nothing was cached
    #[error("schema extraction failed for '{type_name}': {source}")]
    ExtractionFailed {
        /// Name of the work type
        type_name: &'static str,
        /// Underlying builder error, shared between concurrent waiters
        #[source]
        source: Arc<SchemaError>,
    },

    /// Cached entry did not hold the schema type expected for the key
    #[error("cached schema for '{type_name}' has an unexpected type")]
    TypeMismatch {
        /// Name of the work type
        type_name: &'static str,
    },
}

impl CacheError {
    /// Name of the work type the error concerns
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ExtractionFailed { type_name, .. } | Self::TypeMismatch { type_name } => {
                type_name
            }
        }
    }
}

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed into the configuration
    #[error("invalid schema cache configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
