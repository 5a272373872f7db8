use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use wis_execution::{SchemaCache, SchemaCacheConfig, TaskSchema, WorkInstanceSchema, WorkType};
use wis_problems::{DefaultTypeValidationContext, Severity};
use wis_properties::SchemaError;
use wis_test_utils::{file, init_tracing, nested, property_problem, scalar, ScriptedExtractor};

fn compile_script() -> ScriptedExtractor {
    ScriptedExtractor::new()
        .with_property(file("source"))
        .with_property(scalar("release"))
        .with_property(nested("options"))
        .with_problem(property_problem("release", "is not annotated", Severity::Warning))
}

struct CompileJava;

static COMPILE_JAVA_EXTRACTIONS: AtomicUsize = AtomicUsize::new(0);

impl WorkType for CompileJava {
    const TYPE_NAME: &'static str = "CompileJava";
    type Schema = TaskSchema;

    fn extract_schema() -> Result<TaskSchema, SchemaError> {
        COMPILE_JAVA_EXTRACTIONS.fetch_add(1, Ordering::SeqCst);
        // Widen the window in which concurrent callers overlap
        thread::sleep(std::time::Duration::from_millis(20));
        compile_script().extract()
    }
}

struct Javadoc;

static JAVADOC_EXTRACTIONS: AtomicUsize = AtomicUsize::new(0);

impl WorkType for Javadoc {
    const TYPE_NAME: &'static str = "Javadoc";
    type Schema = TaskSchema;

    fn extract_schema() -> Result<TaskSchema, SchemaError> {
        JAVADOC_EXTRACTIONS.fetch_add(1, Ordering::SeqCst);
        compile_script().reversed().extract()
    }
}

struct Checkstyle;

impl WorkType for Checkstyle {
    const TYPE_NAME: &'static str = "Checkstyle";
    type Schema = TaskSchema;

    fn extract_schema() -> Result<TaskSchema, SchemaError> {
        compile_script().extract()
    }
}

#[test]
fn test_concurrent_callers_share_one_extraction() {
    init_tracing();
    let cache = &SchemaCache::new(64);

    let schemas: Vec<Arc<TaskSchema>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || cache.schema_for::<CompileJava>().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(COMPILE_JAVA_EXTRACTIONS.load(Ordering::SeqCst), 1);
    for schema in &schemas[1..] {
        assert!(Arc::ptr_eq(&schemas[0], schema));
    }
}

#[test]
fn test_invalidate_reextracts_equal_schema() {
    let cache = SchemaCache::with_config(&SchemaCacheConfig::new().with_max_capacity(8));

    let first = cache.schema_for::<Javadoc>().unwrap();
    cache.invalidate::<Javadoc>();
    let second = cache.schema_for::<Javadoc>().unwrap();

    assert_eq!(JAVADOC_EXTRACTIONS.load(Ordering::SeqCst), 2);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(second.properties().count(), 3);
}

#[test]
fn test_concurrent_validation_of_shared_schema() {
    let cache = &SchemaCache::new(64);

    let contexts: Vec<DefaultTypeValidationContext> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut live = DefaultTypeValidationContext::new();
                    cache.validate_work::<Checkstyle>(&mut live).unwrap();
                    live
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for live in &contexts {
        assert_eq!(live.problems().len(), 1);
        assert_eq!(live.problems()[0].type_name(), Some("Checkstyle"));
        assert!(!live.has_errors());
    }
}
