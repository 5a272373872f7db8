//! Process-wide schema cache using moka
//!
//! Extraction is expensive and its result never changes for a given type, so
//! each work type's schema is extracted once and shared by every caller.

use crate::config::SchemaCacheConfig;
use crate::error::CacheError;
use crate::work::WorkInstanceSchema;
use moka::sync::Cache;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::sync::Arc;
use wis_problems::TypeValidationContext;
use wis_properties::{InstanceSchema, SchemaError};

/// A unit-of-work type whose schema can be extracted
///
/// ```rust
/// use wis_execution::{SchemaCache, TaskSchema, WorkType};
/// use wis_problems::ReplayingTypeValidationContext;
/// use wis_properties::{QualifiedName, ScalarInputPropertySchema, SchemaError};
///
/// struct Clean;
///
/// impl WorkType for Clean {
///     const TYPE_NAME: &'static str = "Clean";
///     type Schema = TaskSchema;
///
///     fn extract_schema() -> Result<TaskSchema, SchemaError> {
///         let mut builder = TaskSchema::builder();
///         builder.add_scalar_input(ScalarInputPropertySchema::new(QualifiedName::parse("force")?))?;
///         builder.build(ReplayingTypeValidationContext::new())
///     }
/// }
///
/// let cache = SchemaCache::default();
/// let first = cache.schema_for::<Clean>()?;
/// let second = cache.schema_for::<Clean>()?;
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// # Ok::<(), wis_execution::CacheError>(())
/// ```
pub trait WorkType: 'static {
    /// Name used to attribute validation problems
    const TYPE_NAME: &'static str;

    /// Schema produced for this type
    type Schema: WorkInstanceSchema + Send + Sync + 'static;

    /// Run extraction
    ///
    /// # Errors
    /// Any builder error raised while assembling the schema.
    fn extract_schema() -> Result<Self::Schema, SchemaError>;
}

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached schemas
    pub entry_count: u64,
}

/// Cache of extracted work schemas keyed by work type
///
/// Cloning is cheap and clones share entries.
#[derive(Debug, Clone)]
pub struct SchemaCache {
    inner: Cache<TypeId, Arc<dyn Any + Send + Sync>>,
}

static GLOBAL: Lazy<SchemaCache> = Lazy::new(SchemaCache::default);

impl SchemaCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create cache from configuration
    #[must_use]
    pub fn with_config(config: &SchemaCacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.max_capacity);
        if let Some(idle) = config.time_to_idle() {
            builder = builder.time_to_idle(idle);
        }
        Self {
            inner: builder.build(),
        }
    }

    /// Shared process-wide cache with default configuration
    #[inline]
    #[must_use]
    pub fn global() -> &'static SchemaCache {
        &GLOBAL
    }

    /// Schema of `W`, extracting it on first use
    ///
    /// Concurrent callers for the same type wait on a single extraction and
    /// receive the same `Arc`. Failed extractions are not cached.
    ///
    /// # Errors
    /// [`CacheError::ExtractionFailed`] if `W::extract_schema` fails.
    pub fn schema_for<W: WorkType>(&self) -> Result<Arc<W::Schema>, CacheError> {
        let erased = self
            .inner
            .try_get_with(TypeId::of::<W>(), || {
                tracing::debug!(work_type = W::TYPE_NAME, "extracting work schema");
                W::extract_schema().map(|schema| Arc::new(schema) as Arc<dyn Any + Send + Sync>)
            })
            .map_err(|source| {
                tracing::warn!(work_type = W::TYPE_NAME, error = %source, "schema extraction failed");
                CacheError::ExtractionFailed {
                    type_name: W::TYPE_NAME,
                    source,
                }
            })?;

        erased
            .downcast::<W::Schema>()
            .map_err(|_| CacheError::TypeMismatch {
                type_name: W::TYPE_NAME,
            })
    }

    /// Replay the extraction problems of `W` into `context`
    ///
    /// Problems without a type are attributed to `W::TYPE_NAME`.
    ///
    /// # Errors
    /// [`CacheError`] if the schema cannot be obtained.
    pub fn validate_work<W: WorkType>(
        &self,
        context: &mut dyn TypeValidationContext,
    ) -> Result<(), CacheError> {
        let schema = self.schema_for::<W>()?;
        schema
            .validation_problems()
            .replay(Some(W::TYPE_NAME), context);
        Ok(())
    }

    /// Check if the schema of `W` is cached
    #[inline]
    #[must_use]
    pub fn contains<W: WorkType>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<W>())
    }

    /// Drop the cached schema of `W`
    #[inline]
    pub fn invalidate<W: WorkType>(&self) {
        self.inner.invalidate(&TypeId::of::<W>());
    }

    /// Drop every cached schema
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Apply pending evictions so counts are exact
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }

    /// Get approximate entry count
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for SchemaCache {
    /// Create cache with default configuration (10,000 entries)
    fn default() -> Self {
        Self::with_config(&SchemaCacheConfig::default())
    }
}
