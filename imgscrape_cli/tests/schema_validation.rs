use imgscrape_lib::imgscrape_api::providers::{brave, duckduckgo, google};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Vec<u8> {
    let path = workspace_root()
        .join("imgscrape_api/tests/fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

fn load_schema() -> Value {
    let path = workspace_root().join("schema/image_result.schema.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn google_json() -> Value {
    let results: Vec<_> = google::parse_json(&load_fixture("google.json"))
        .expect("google fixture parses")
        .collect();
    serde_json::to_value(results).expect("results serialize")
}

fn assert_conforms(data: &Value) {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    if let Err(e) = validator.validate(data) {
        panic!("output failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Positive validation: provider output conforms to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_google_output_conforms_to_schema() {
    assert_conforms(&google_json());
}

#[test]
fn test_google_html_output_conforms_to_schema() {
    let page = String::from_utf8(load_fixture("google.html")).expect("fixture is UTF-8");
    let results: Vec<_> = google::parse_html(&page)
        .expect("google page parses")
        .collect();
    assert_conforms(&serde_json::to_value(results).expect("results serialize"));
}

#[test]
fn test_duckduckgo_output_conforms_to_schema() {
    let results: Vec<_> = duckduckgo::parse_results(&load_fixture("duckduckgo.json"))
        .expect("duckduckgo fixture parses")
        .collect();
    assert_conforms(&serde_json::to_value(results).expect("results serialize"));
}

#[test]
fn test_brave_output_conforms_to_schema() {
    let results: Vec<_> = brave::parse_results(&load_fixture("brave.json"))
        .expect("brave fixture parses")
        .collect();
    assert_conforms(&serde_json::to_value(results).expect("results serialize"));
}

// ---------------------------------------------------------------------------
// Negative validation: schema rejects invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_missing_url() {
    let schema = load_schema();
    let mut data = google_json();

    data[0]
        .as_object_mut()
        .expect("result is an object")
        .remove("url");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject result missing url"
    );
}

#[test]
fn test_schema_rejects_relative_thumbnail() {
    let schema = load_schema();
    let mut data = google_json();
    data[0]["thumbnail_url"] = Value::String("/images/t1.jpg".to_string());

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject relative thumbnail_url"
    );
}

#[test]
fn test_schema_rejects_unknown_provider() {
    let schema = load_schema();
    let mut data = google_json();
    data[0]["provider"] = Value::String("bing".to_string());

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject unknown provider"
    );
}
