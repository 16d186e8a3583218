use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use serde_json::Value;

/// Failure raised by a tool handler during execution.
///
/// Carries only a message; the dispatcher surfaces it verbatim to the
/// caller and does not interpret it further.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ToolError {
    message: String,
}

impl ToolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ToolError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToolError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// A named, schema-declared callable capability.
///
/// `invoke` receives arguments that already satisfy `input_schema`; handlers
/// do not re-check primitive types but may still fail on domain conditions
/// (e.g. division by zero).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name, used for registration and `tools/call` lookup.
    fn name(&self) -> &str;

    /// Human-readable description, no behavioral effect.
    fn description(&self) -> &str;

    /// JSON Schema describing the accepted argument object.
    fn input_schema(&self) -> Value;

    /// Execute the tool with validated arguments.
    async fn invoke(&self, args: Value) -> Result<Value, ToolError>;
}

type Handler = Box<
    dyn Fn(Value) -> Pin<Box<dyn Future<Output = Result<Value, ToolError>> + Send>>
        + Send
        + Sync,
>;

/// A [`Tool`] built from a name, description, schema, and an async closure.
pub struct FnTool {
    name: String,
    description: String,
    input_schema: Value,
    handler: Handler,
}

impl FnTool {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
        handler: F,
    ) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Box::new(move |args| Box::pin(handler(args))),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        self.input_schema.clone()
    }

    async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
        (self.handler)(args).await
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo_tool() -> FnTool {
        FnTool::new(
            "echo",
            "Echo back the input",
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
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

    #[tokio::test]
    async fn fn_tool_invokes_handler() {
        let tool = echo_tool();
        let result = tool.invoke(json!({ "message": "hi" })).await.unwrap();
        assert_eq!(result, json!({ "echo": "hi" }));
    }

    #[tokio::test]
    async fn fn_tool_propagates_handler_failure() {
        let tool = FnTool::new(
            "boom",
            "Always fails",
            json!({ "type": "object", "properties": {} }),
            |_| async { Err(ToolError::new("it broke")) },
        );
        let err = tool.invoke(json!({})).await.unwrap_err();
        assert_eq!(err.message(), "it broke");
    }

    #[test]
    fn fn_tool_exposes_descriptor_fields() {
        let tool = echo_tool();
        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.description(), "Echo back the input");
        assert_eq!(tool.input_schema()["type"], "object");
    }
}
