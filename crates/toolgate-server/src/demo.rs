//! The tools the server ships with: echo, calculator, and a mock weather
//! report. The integration tests exercise the same set.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

use toolgate_core::{FnTool, Tool, ToolError};

/// The shipped tool set, in listing order.
pub fn demo_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(echo()),
        Arc::new(calculator()),
        Arc::new(weather()),
    ]
}

fn echo() -> FnTool {
    FnTool::new(
        "echo",
        "Echo back the input",
        json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Message to echo back"
                }
            },
            "required": ["message"]
        }),
        |args| async move {
            let message = args
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(json!({ "echo": message }))
        },
    )
}

fn calculator() -> FnTool {
    FnTool::new(
        "calculator",
        "Perform basic arithmetic operations",
        json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": ["add", "subtract", "multiply", "divide"],
                    "description": "Operation to perform"
                },
                "a": { "type": "number", "description": "First number" },
                "b": { "type": "number", "description": "Second number" }
            },
            "required": ["operation", "a", "b"]
        }),
        |args| async move {
            let a = args["a"].as_f64().unwrap_or_default();
            let b = args["b"].as_f64().unwrap_or_default();
            let result = match args["operation"].as_str().unwrap_or_default() {
                "add" => a + b,
                "subtract" => a - b,
                "multiply" => a * b,
                "divide" => {
                    // Zero passes validation (it is a valid number); the
                    // failure is a domain condition, raised here.
                    if b == 0.0 {
                        return Err(ToolError::new("cannot divide by zero"));
                    }
                    a / b
                }
                other => return Err(ToolError::new(format!("invalid operation: {other}"))),
            };
            Ok(json!({ "result": result }))
        },
    )
}

fn weather() -> FnTool {
    FnTool::new(
        "weather",
        "Get the current weather for a location (mock data)",
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Location to get weather for"
                }
            },
            "required": ["location"]
        }),
        |args| async move {
            let location = args
                .get("location")
                .and_then(Value::as_str)
                .unwrap_or_default();

            const CONDITIONS: [&str; 4] = ["sunny", "cloudy", "rainy", "snowy"];
            let roll = pseudo_random(location);
            let condition = CONDITIONS[(roll % CONDITIONS.len() as u64) as usize];
            let temperature = 5 + (roll / 7) % 35; // 5..40 celsius

            Ok(json!({
                "location": location,
                "condition": condition,
                "temperature": temperature,
                "unit": "celsius",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        },
    )
}

fn pseudo_random(seed: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
        .hash(&mut hasher);
    hasher.finish()
}
