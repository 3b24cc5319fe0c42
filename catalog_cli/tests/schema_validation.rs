use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("catalog_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_products_fixture_conforms_to_schema() {
    let fixture = load_fixture("products.json");
    let schema = load_schema("product.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    if let Err(e) = validator.validate(&fixture) {
        panic!("products fixture failed validation: {e}");
    }
}

#[test]
fn test_single_product_fixture_conforms_to_schema() {
    let fixture = load_fixture("product.json");
    let schema = load_schema("product.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    assert!(validator.is_valid(&json!([fixture])));
}

#[test]
fn test_user_fixture_conforms_to_schema() {
    let fixture = load_fixture("user.json");
    let schema = load_schema("user.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("user schema compiles");
    if let Err(e) = validator.validate(&fixture) {
        panic!("user fixture failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject malformed records
// ---------------------------------------------------------------------------

#[test]
fn test_product_schema_rejects_missing_name() {
    let schema = load_schema("product.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    assert!(!validator.is_valid(&json!([{"id": 1, "price": 2.0}])));
}

#[test]
fn test_product_schema_rejects_negative_price() {
    let schema = load_schema("product.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("product schema compiles");
    assert!(!validator.is_valid(&json!([{"id": 1, "name": "x", "price": -1}])));
}

#[test]
fn test_user_schema_rejects_bad_email() {
    let schema = load_schema("user.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("user schema compiles");
    assert!(!validator.is_valid(&json!({"id": 1, "full_name": "Ana", "email": "nope"})));
}
