//! Top-level shape checks

use serde_json::{Map, Value};

/// Name of the JSON kind held by `value`, as shown in diagnostics
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwrap the top-level object, or hand back the kind that was found instead
pub fn require_object(value: Value) -> Result<Map<String, Value>, &'static str> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(json_kind(&other)),
    }
}
