//! Validate tool-call arguments against a tool's declared schema.
//!
//! Hosts run this before invoking a tool; the adapters do not depend on it
//! and re-apply their own defaulting regardless.

/// Validate arguments against a JSON Schema.
///
/// Covers the schema surface this crate's tools declare: object type check,
/// required field presence, property type verification, enum membership,
/// and integer bounds. Returns `Err(message)` describing the first
/// violation found.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    if let Some(schema_type) = schema.get("type").and_then(|v| v.as_str()) {
        if schema_type == "object" && !args.is_object() {
            return Err(format!(
                "expected object arguments, got {}",
                json_type_name(args)
            ));
        }
    }

    let obj = match args.as_object() {
        Some(obj) => obj,
        None => return Ok(()),
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for field in required {
            if let Some(name) = field.as_str() {
                if !obj.contains_key(name) {
                    return Err(format!("missing required field '{name}'"));
                }
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) {
        for (key, value) in obj {
            let prop_schema = match properties.get(key) {
                Some(schema) => schema,
                None => continue,
            };
            if let Some(expected) = prop_schema.get("type").and_then(|v| v.as_str()) {
                if !value_matches_type(value, expected) {
                    return Err(format!(
                        "field '{}' expected type '{}', got {}",
                        key,
                        expected,
                        json_type_name(value)
                    ));
                }
            }
            if let Some(allowed) = prop_schema.get("enum").and_then(|v| v.as_array()) {
                if !allowed.contains(value) {
                    return Err(format!("field '{key}' is not one of the allowed values"));
                }
            }
            if let Some(n) = value.as_i64() {
                if let Some(min) = prop_schema.get("minimum").and_then(|v| v.as_i64()) {
                    if n < min {
                        return Err(format!("field '{key}' is below minimum {min}"));
                    }
                }
                if let Some(max) = prop_schema.get("maximum").and_then(|v| v.as_i64()) {
                    if n > max {
                        return Err(format!("field '{key}' is above maximum {max}"));
                    }
                }
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
