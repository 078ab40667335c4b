//! Tests for loading and saving stack-files

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use stack_core::{Error, StackFile};
use stack_test_utils::TestStackFile;

#[test]
fn test_load_reads_id_and_custom_json() {
    let file = TestStackFile::with_json(r#"{"stack-id": "abc-123", "custom-json": {"foo": 1}}"#);

    let stack = StackFile::load(file.path()).unwrap();

    assert_eq!(stack.stack_id, "abc-123");
    assert_eq!(stack.custom_json, json!({"foo": 1}));
}

#[test]
fn test_load_defaults_missing_custom_json_to_empty_object() {
    let file = TestStackFile::with_json(r#"{"stack-id": "abc-123"}"#);

    let stack = StackFile::load(file.path()).unwrap();

    assert_eq!(stack.custom_json, json!({}));
}

#[rstest]
#[case::empty_object("{}")]
#[case::only_custom_json(r#"{"custom-json": {"a": 1}}"#)]
#[case::misspelled(r#"{"stack_id": "abc"}"#)]
fn test_load_without_stack_id_is_format_error(#[case] content: &str) {
    let file = TestStackFile::with_json(content);

    let err = StackFile::load(file.path()).unwrap_err();

    assert!(matches!(err, Error::Format { .. }), "got {err:?}");
    assert!(err.to_string().contains("stack-id"));
}

#[test]
fn test_load_invalid_json_is_parse_error() {
    let file = TestStackFile::with_json("{\"stack-id\": ");

    let err = StackFile::load(file.path()).unwrap_err();

    assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let file = TestStackFile::missing();

    let err = StackFile::load(file.path()).unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
}

#[test]
fn test_save_writes_two_space_indent() {
    let file = TestStackFile::missing();
    let stack = StackFile::new("abc-123").with_custom_json(json!({"foo": 1}));

    stack.save(file.path()).unwrap();

    assert_eq!(
        file.read(),
        "{\n  \"stack-id\": \"abc-123\",\n  \"custom-json\": {\n    \"foo\": 1\n  }\n}\n"
    );
}

#[test]
fn test_load_then_save_keeps_content() {
    let original = json!({
        "stack-id": "abc-123",
        "custom-json": {"zeta": [1, 2, {"b": null}], "alpha": "x"},
        "comment": "edited by hand"
    });
    let file = TestStackFile::with_document(&original);

    StackFile::load(file.path()).unwrap().save(file.path()).unwrap();

    assert_eq!(file.read_json(), original);
}

#[test]
fn test_save_preserves_key_order() {
    let file = TestStackFile::with_json(
        r#"{"stack-id": "s", "custom-json": {"zeta": 1, "alpha": 2, "mid": 3}}"#,
    );

    StackFile::load(file.path()).unwrap().save(file.path()).unwrap();

    let content = file.read();
    let zeta = content.find("zeta").unwrap();
    let alpha = content.find("alpha").unwrap();
    let mid = content.find("mid").unwrap();
    assert!(zeta < alpha && alpha < mid, "key order changed:\n{content}");
}

#[test]
fn test_save_overwrites_longer_file() {
    let file = TestStackFile::with_json(&format!(
        r#"{{"stack-id": "s", "custom-json": {{"padding": "{}"}}}}"#,
        "x".repeat(512)
    ));

    StackFile::new("s").save(file.path()).unwrap();

    assert_eq!(file.read_json(), json!({"stack-id": "s", "custom-json": {}}));
}

#[test]
fn test_load_then_save_keeps_integers_beyond_u64() {
    let file = TestStackFile::with_json(
        r#"{"stack-id":"abc","custom-json":{"id":123456789012345678901234567890,"neg":-98765432109876543210}}"#,
    );

    let stack = StackFile::load(file.path()).unwrap();
    stack.save(file.path()).unwrap();

    let content = file.read();
    assert!(content.contains("\"id\": 123456789012345678901234567890"), "{content}");
    assert!(content.contains("\"neg\": -98765432109876543210"), "{content}");
    assert!(
        stack
            .custom_json_string()
            .unwrap()
            .contains("123456789012345678901234567890")
    );
}
