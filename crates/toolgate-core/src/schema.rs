//! Argument validation against a minimal JSON Schema.
//!
//! Supports the subset tools declare in practice: `type: "object"` with
//! `properties` (primitive types plus `enum`) and `required`. Unknown extra
//! fields are ignored. All failures for a given argument object are
//! collected, not just the first.

use serde::Serialize;
use serde_json::Value;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub reason: String,
}

/// Arguments did not match the declared schema.
#[derive(Debug, Clone, thiserror::Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid arguments: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.path, err.reason)?;
        }
        Ok(())
    }
}

/// Validate `args` against `schema`, returning the accepted argument object.
///
/// Handlers receive the returned value as-is; numbers stay numbers and
/// optional fields that were absent stay absent.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every field that failed.
pub fn validate(schema: &Value, args: &Value) -> Result<Value, ValidationError> {
    let Some(args_obj) = args.as_object() else {
        return Err(ValidationError {
            errors: vec![FieldError {
                path: String::new(),
                reason: "arguments must be a JSON object".to_string(),
            }],
        });
    };

    let mut errors = Vec::new();

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !args_obj.contains_key(name) {
                errors.push(FieldError {
                    path: name.to_string(),
                    reason: "missing required field".to_string(),
                });
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, prop) in properties {
            let Some(value) = args_obj.get(name) else {
                continue;
            };
            check_field(name, prop, value, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(Value::Object(args_obj.clone()))
    } else {
        Err(ValidationError { errors })
    }
}

fn check_field(name: &str, prop: &Value, value: &Value, errors: &mut Vec<FieldError>) {
    if let Some(declared) = prop.get("type").and_then(Value::as_str) {
        if !type_matches(declared, value) {
            errors.push(FieldError {
                path: name.to_string(),
                reason: format!("expected {declared}, got {}", type_name(value)),
            });
            return;
        }
    }

    if let Some(allowed) = prop.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            let variants: Vec<String> = allowed.iter().map(render_variant).collect();
            errors.push(FieldError {
                path: name.to_string(),
                reason: format!("must be one of: {}", variants.join(", ")),
            });
        }
    }
}

fn type_matches(declared: &str, value: &Value) -> bool {
    match declared {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        // Unknown type names do not constrain the value.
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn render_variant(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
