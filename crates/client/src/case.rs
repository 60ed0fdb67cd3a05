//! Key-case conversion for the write boundary
//!
//! The backend wire format is snake_case while frontend-originated payloads
//! arrive with camelCase keys. Write payloads are normalized here before
//! serialization; read responses are never converted (wire types already use
//! snake_case fields).

use convert_case::{Case, Casing};
use serde_json::{Map, Value};

/// Recursively rewrite every object key in `value` from camelCase to
/// snake_case.
///
/// Array element order and primitive values are untouched. Keys without
/// uppercase letters pass through unchanged, which makes the conversion
/// idempotent over already-snake_case structures.
pub fn to_snake_case(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(key, val)| (snake_key(&key), to_snake_case(val)))
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(to_snake_case).collect()),
        other => other,
    }
}

fn snake_key(key: &str) -> String {
    if key.chars().any(|c| c.is_ascii_uppercase()) {
        key.to_case(Case::Snake)
    } else {
        key.to_owned()
    }
}
