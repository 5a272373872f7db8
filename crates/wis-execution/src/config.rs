//! Schema cache configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sizing and expiry of a [`SchemaCache`](crate::SchemaCache)
///
/// Missing TOML keys fall back to the defaults:
///
/// ```rust
/// use wis_execution::SchemaCacheConfig;
///
/// let config = SchemaCacheConfig::from_toml_str("time_to_idle_secs = 600")?;
/// assert_eq!(config.max_capacity, 10_000);
/// assert_eq!(config.time_to_idle_secs, Some(600));
/// # Ok::<(), wis_execution::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaCacheConfig {
    /// Maximum number of cached schemas
    pub max_capacity: u64,
    /// Evict schemas not read for this many seconds
    pub time_to_idle_secs: Option<u64>,
}

impl SchemaCacheConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With maximum capacity
    #[inline]
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// With idle expiry
    #[inline]
    #[must_use]
    pub fn with_time_to_idle(mut self, idle: Duration) -> Self {
        self.time_to_idle_secs = Some(idle.as_secs());
        self
    }

    /// Idle expiry as a duration
    #[inline]
    #[must_use]
    pub fn time_to_idle(&self) -> Option<Duration> {
        self.time_to_idle_secs.map(Duration::from_secs)
    }

    /// Parse from a TOML document
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML or mistyped values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for SchemaCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_idle_secs: None,
        }
    }
}
