// ABOUTME: Tests for ToolOutput - construction, lookup, serialization.
// ABOUTME: Verifies outputs stay plain JSON objects.

use super::*;

#[test]
fn test_with_fields() {
    let output = ToolOutput::new()
        .with("transport", "Kafka")
        .with("score", 0.25);

    assert_eq!(output.len(), 2);
    assert_eq!(output.get("transport").and_then(|v| v.as_str()), Some("Kafka"));
    assert_eq!(output.get("score").and_then(|v| v.as_f64()), Some(0.25));
    assert!(output.get("missing").is_none());
}

#[test]
fn test_default_is_empty() {
    let output = ToolOutput::default();
    assert!(output.is_empty());
    assert_eq!(serde_json::to_value(&output).unwrap(), serde_json::json!({}));
}

#[test]
fn test_serializes_as_plain_object() {
    let output = ToolOutput::new().with("headlines", vec!["a", "b"]);
    let value: serde_json::Value = output.clone().into();

    assert_eq!(value, serde_json::json!({"headlines": ["a", "b"]}));
    assert_eq!(serde_json::to_value(&output).unwrap(), value);
}

#[test]
fn test_keys_keep_insertion_order() {
    let output = ToolOutput::new().with("z", 1).with("a", 2);
    let keys: Vec<_> = output.into_map().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a"]);
}
