use pretty_assertions::assert_eq;
use serde_json::json;
use wis_properties::{
    FileInputPropertySchema, FileNormalizer, InputBehavior, NestedPropertySchema, PropertySchema,
    QualifiedName, ScalarInputPropertySchema,
};

fn name(s: &str) -> QualifiedName {
    QualifiedName::parse(s).unwrap()
}

#[test]
fn properties_survive_serialization() {
    let properties = vec![
        PropertySchema::from(
            NestedPropertySchema::new(name("options")).with_bean_type("CompileOptions"),
        ),
        PropertySchema::from(
            ScalarInputPropertySchema::new(name("options.release")).with_optional(true),
        ),
        PropertySchema::from(
            FileInputPropertySchema::new(name("sources"))
                .with_behavior(InputBehavior::Primary)
                .with_normalizer(FileNormalizer::RelativePath),
        ),
    ];

    let encoded = serde_json::to_string(&properties).unwrap();
    let decoded: Vec<PropertySchema> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, properties);
}

#[test]
fn property_is_tagged_with_its_kind() {
    let property = PropertySchema::from(NestedPropertySchema::new(name("options")));
    let value = serde_json::to_value(&property).unwrap();

    assert_eq!(value["kind"], json!("nested"));
    assert_eq!(value["qualified_name"], json!("options"));
}

#[test]
fn qualified_name_serializes_as_plain_string() {
    let value = serde_json::to_value(name("options.compilerArgs")).unwrap();
    assert_eq!(value, json!("options.compilerArgs"));
}

#[test]
fn invalid_qualified_name_rejected_on_deserialize() {
    for invalid in ["\"\"", "\"a..b\"", "\".a\"", "\"a b\""] {
        assert!(
            serde_json::from_str::<QualifiedName>(invalid).is_err(),
            "accepted {invalid}"
        );
    }
}

#[test]
fn property_with_invalid_name_rejected_on_deserialize() {
    let document = json!({
        "kind": "scalar_input",
        "qualified_name": "a..b",
        "optional": false,
        "value_type": null,
    });

    assert!(serde_json::from_value::<PropertySchema>(document).is_err());
}
