//! Tests for the JSON document model and its canonical serialization.

use getjson::json::escape_json;
use getjson::{JsonNumber, JsonValue, ToJson};

#[test]
fn test_string_to_json_string() {
    assert_eq!(
        JsonValue::String("test".to_string()).to_json_string(),
        "\"test\""
    );
    assert_eq!(
        JsonValue::String("te\nst".to_string()).to_json_string(),
        "\"te\\nst\""
    );
}

#[test]
fn test_escape_table() {
    assert_eq!(escape_json("a\\b"), "a\\\\b");
    assert_eq!(escape_json("say \"hi\""), "say \\\"hi\\\"");
    assert_eq!(escape_json("line\nbreak"), "line\\nbreak");
    assert_eq!(escape_json("ret\rurn"), "ret\\rurn");
    assert_eq!(escape_json("tab\tbed"), "tab\\tbed");
    assert_eq!(escape_json("back\u{0008}space"), "back\\bspace");
    assert_eq!(escape_json("form\u{000C}feed"), "form\\ffeed");
}

#[test]
fn test_escape_passes_other_characters_through() {
    // No codepoint escaping: non-ASCII and other control characters stay raw.
    assert_eq!(escape_json("héllo"), "héllo");
    assert_eq!(escape_json("ctrl\u{0001}char"), "ctrl\u{0001}char");
}

#[test]
fn test_number_to_json_string() {
    assert_eq!(JsonValue::Number(JsonNumber::Int(64)).to_json_string(), "64");
    assert_eq!(
        JsonValue::Number(JsonNumber::Float(12.4)).to_json_string(),
        "12.4"
    );
    assert_eq!(
        JsonValue::Number(JsonNumber::Int(-3)).to_json_string(),
        "-3"
    );
}

#[test]
fn test_boolean_and_null_to_json_string() {
    assert_eq!(JsonValue::Bool(true).to_json_string(), "true");
    assert_eq!(JsonValue::Bool(false).to_json_string(), "false");
    assert_eq!(JsonValue::Null.to_json_string(), "null");
}

#[test]
fn test_array_to_json_string() {
    let value = JsonValue::array(vec![
        "test".to_json(),
        64.to_json(),
        true.to_json(),
    ]);
    assert_eq!(value.to_json_string(), "[\"test\",64,true]");
}

#[test]
fn test_empty_array_and_object() {
    assert_eq!(JsonValue::array(Vec::new()).to_json_string(), "[]");
    assert_eq!(JsonValue::object(Vec::new()).to_json_string(), "{}");
}

#[test]
fn test_object_to_json_string_keeps_insertion_order() {
    let value = JsonValue::object([
        ("testStr".to_string(), "test".to_json()),
        ("testNum".to_string(), 32.to_json()),
        ("testBool".to_string(), true.to_json()),
    ]);
    assert_eq!(
        value.to_json_string(),
        "{\"testStr\":\"test\",\"testNum\":32,\"testBool\":true}"
    );
}

#[test]
fn test_object_key_escaping() {
    let value = JsonValue::object([("we\"ird".to_string(), 1.to_json())]);
    assert_eq!(value.to_json_string(), "{\"we\\\"ird\":1}");
}

#[test]
fn test_object_duplicate_key_last_write_wins() {
    let value = JsonValue::object([
        ("a".to_string(), 1.to_json()),
        ("b".to_string(), 2.to_json()),
        ("a".to_string(), 3.to_json()),
    ]);
    // The replaced key keeps its original position.
    assert_eq!(value.to_json_string(), "{\"a\":3,\"b\":2}");
}

#[test]
fn test_nested_document() {
    let address = JsonValue::object([
        ("street".to_string(), "123 Main St".to_json()),
        ("city".to_string(), "Anytown".to_json()),
    ]);
    let user = JsonValue::object([
        ("id".to_string(), 1.to_json()),
        ("name".to_string(), "John Doe".to_json()),
        ("isLoggedIn".to_string(), true.to_json()),
        (
            "preferences".to_string(),
            JsonValue::array(vec!["email".to_json(), "notifications".to_json()]),
        ),
        ("address".to_string(), address),
        ("age".to_string(), JsonValue::Null),
    ]);
    assert_eq!(
        user.to_json_string(),
        "{\"id\":1,\"name\":\"John Doe\",\"isLoggedIn\":true,\
         \"preferences\":[\"email\",\"notifications\"],\
         \"address\":{\"street\":\"123 Main St\",\"city\":\"Anytown\"},\"age\":null}"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let value = JsonValue::object([
        ("k".to_string(), JsonValue::array(vec![1.to_json(), 2.to_json()])),
        ("n".to_string(), JsonValue::Null),
    ]);
    assert_eq!(value.to_json_string(), value.to_json_string());
    assert_eq!(value.clone().to_json_string(), value.to_json_string());
}

#[test]
fn test_output_parses_as_json() {
    let value = JsonValue::object([
        ("text".to_string(), "a \"quoted\"\nline".to_json()),
        ("num".to_string(), 12.4.to_json()),
        ("list".to_string(), JsonValue::array(vec![true.to_json(), JsonValue::Null])),
    ]);
    let reparsed: serde_json::Value =
        serde_json::from_str(&value.to_json_string()).expect("canonical output must parse");
    assert_eq!(reparsed["num"], serde_json::json!(12.4));
    assert_eq!(reparsed["text"], serde_json::json!("a \"quoted\"\nline"));
}

#[test]
fn test_equality_array_order_sensitive() {
    let a = JsonValue::array(vec![1.to_json(), 2.to_json()]);
    let b = JsonValue::array(vec![2.to_json(), 1.to_json()]);
    assert_ne!(a, b);
    assert_eq!(a, JsonValue::array(vec![1.to_json(), 2.to_json()]));
}

#[test]
fn test_equality_object_order_insensitive() {
    let a = JsonValue::object([
        ("x".to_string(), 1.to_json()),
        ("y".to_string(), 2.to_json()),
    ]);
    let b = JsonValue::object([
        ("y".to_string(), 2.to_json()),
        ("x".to_string(), 1.to_json()),
    ]);
    assert_eq!(a, b);
    // Serializations still differ because insertion order differs.
    assert_ne!(a.to_json_string(), b.to_json_string());
}

#[test]
fn test_equality_across_variants() {
    assert_ne!(JsonValue::Null, JsonValue::Bool(false));
    assert_ne!(
        JsonValue::Number(JsonNumber::Int(1)),
        JsonValue::Number(JsonNumber::Float(1.0))
    );
    assert_eq!(JsonValue::Null, JsonValue::Null);
}

#[test]
fn test_map_array() {
    let value = JsonValue::array(vec!["a".to_json(), 64.to_json(), true.to_json()]);
    let mapped = value.map_array(|_| 16.to_json()).unwrap();
    assert_eq!(mapped.to_json_string(), "[16,16,16]");
    assert!(JsonValue::Null.map_array(|v| v.clone()).is_none());
}

#[test]
fn test_filter_array() {
    let value = JsonValue::array(vec!["test".to_json(), 64.to_json(), true.to_json()]);
    let filtered = value
        .filter_array(|item| matches!(item, JsonValue::Number(_)))
        .unwrap();
    assert_eq!(filtered.to_json_string(), "[64]");
}

#[test]
fn test_filter_object() {
    let value = JsonValue::object([
        ("testStr".to_string(), "test".to_json()),
        ("testNum".to_string(), 32.to_json()),
        ("testBool".to_string(), true.to_json()),
    ]);
    let filtered = value.filter_object(|key, _| key == "testStr").unwrap();
    assert_eq!(filtered.to_json_string(), "{\"testStr\":\"test\"}");
    assert!(JsonValue::Bool(true).filter_object(|_, _| true).is_none());
}

#[test]
fn test_accessors() {
    let value = JsonValue::object([("k".to_string(), "v".to_json())]);
    assert!(value.as_object().is_some());
    assert!(value.as_array().is_none());
    assert_eq!(
        value.as_object().and_then(|map| map.get("k")).and_then(JsonValue::as_str),
        Some("v")
    );
    assert!(JsonValue::Null.is_null());
}
