use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wis_problems::ReplayingTypeValidationContext;
use wis_properties::{
    InstanceSchema, NestedInstanceSchema, NestedPropertySchema, QualifiedName, QualifiedProperty,
};

fn nested(name: &str) -> NestedPropertySchema {
    NestedPropertySchema::new(QualifiedName::parse(name).unwrap())
}

fn build(names: &[&str]) -> NestedInstanceSchema {
    let mut builder = NestedInstanceSchema::builder();
    for name in names {
        builder.add(nested(name)).unwrap();
    }
    builder.build(ReplayingTypeValidationContext::new()).unwrap()
}

#[test]
fn test_discovery_order_does_not_affect_equality() {
    assert_eq!(build(&["a", "b"]), build(&["b", "a"]));
}

#[test]
fn test_different_content_is_unequal() {
    assert_ne!(build(&["a", "b"]), build(&["a", "c"]));
}

#[test]
fn test_duplicate_names_are_kept_adjacent() {
    let schema = build(&["x", "a", "x"]);
    let names: Vec<_> = schema
        .nested_properties()
        .iter()
        .map(|p| p.qualified_name().as_str())
        .collect();
    assert_eq!(names, vec!["a", "x", "x"]);
}

#[test]
fn test_duplicates_keep_insertion_order() {
    let first = nested("x").with_bean_type("First");
    let second = nested("x").with_bean_type("Second");

    let mut builder = NestedInstanceSchema::builder();
    builder.add(second.clone()).unwrap();
    builder.add(nested("a")).unwrap();
    builder.add(first.clone()).unwrap();
    let schema = builder.build(ReplayingTypeValidationContext::new()).unwrap();

    assert_eq!(schema.nested_properties()[1], second);
    assert_eq!(schema.nested_properties()[2], first);
}

fn segment() -> impl Strategy<Value = String> {
    "[a-z$][a-zA-Z0-9_]{0,6}"
}

fn qualified_name() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn prop_build_output_is_sorted(names in prop::collection::vec(qualified_name(), 0..24)) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let schema = build(&refs);
        let properties = schema.nested_properties();

        prop_assert_eq!(properties.len(), names.len());
        for pair in properties.windows(2) {
            prop_assert!(pair[0].qualified_name() <= pair[1].qualified_name());
        }
    }

    #[test]
    fn prop_equality_ignores_discovery_order(
        names in prop::collection::vec(qualified_name(), 0..16),
        seed in any::<u64>(),
    ) {
        let mut shuffled = names.clone();
        // deterministic rotation plus reversal is enough to reorder
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left(usize::try_from(seed % len as u64).unwrap());
            shuffled.reverse();
        }

        let a: Vec<&str> = names.iter().map(String::as_str).collect();
        let b: Vec<&str> = shuffled.iter().map(String::as_str).collect();
        prop_assert_eq!(build(&a), build(&b));
    }
}
