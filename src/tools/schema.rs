//! Argument validation against a tool's declared JSON schema.
//!
//! Covers the subset of JSON Schema the tool declarations use: an object with
//! `properties`, `required` and `additionalProperties: false`, where each
//! property has a `type` of string/number/integer/boolean/array and an
//! optional `enum` (also honoured on array `items`).

use serde_json::{Map, Value};

use crate::error::{AgencyError, AgencyResult};

/// Check `args` against `schema`, naming `tool` in any violation.
pub fn validate(tool: &str, schema: &Value, args: &Value) -> AgencyResult<()> {
    let args = args
        .as_object()
        .ok_or_else(|| AgencyError::schema(tool, format!("arguments must be an object, got {}", kind_of(args))))?;

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for key in required.iter().filter_map(Value::as_str) {
            if !args.contains_key(key) {
                return Err(AgencyError::schema(tool, format!("missing required field '{}'", key)));
            }
        }
    }

    let closed = schema.get("additionalProperties") == Some(&Value::Bool(false));

    for (key, value) in args {
        match properties.get(key) {
            Some(property) => check_property(tool, key, property, value)?,
            None if closed => {
                return Err(AgencyError::schema(tool, format!("undeclared field '{}'", key)));
            }
            None => {}
        }
    }

    Ok(())
}

fn check_property(tool: &str, key: &str, property: &Value, value: &Value) -> AgencyResult<()> {
    if let Some(expected) = property.get("type").and_then(Value::as_str) {
        if !matches_type(expected, value) {
            return Err(AgencyError::schema(
                tool,
                format!("field '{}' must be of type {}, got {}", key, expected, kind_of(value)),
            ));
        }
    }

    if let Some(allowed) = property.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            return Err(AgencyError::schema(
                tool,
                format!("field '{}' must be one of {}, got {}", key, list(allowed), value),
            ));
        }
    }

    if let (Some(items), Some(elements)) = (property.get("items"), value.as_array()) {
        for (i, element) in elements.iter().enumerate() {
            check_property(tool, &format!("{}[{}]", key, i), items, element)?;
        }
    }

    Ok(())
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => true,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn list(allowed: &[Value]) -> String {
    let items: Vec<String> = allowed.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Required field names declared by a schema, in declaration order.
pub fn required_fields(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Declared properties of a schema, empty when none are declared.
pub fn properties(schema: &Value) -> Map<String, Value> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}
