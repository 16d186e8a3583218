//! Stateless JSON-RPC dispatcher over a tool registry.
//!
//! Each request runs a four-stage pipeline: envelope parse, method routing,
//! tool resolution, then argument validation and execution. Any stage may
//! short-circuit to an error response; every outcome maps to exactly one
//! well-formed JSON-RPC response.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use toolgate_core::{schema, ToolRegistry};

use crate::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    METHOD_NOT_FOUND,
};

const METHOD_TOOLS_LIST: &str = "tools/list";
const METHOD_TOOLS_CALL: &str = "tools/call";

/// Routes JSON-RPC requests to registry lookups and tool execution.
///
/// Holds no mutable state; the registry is read-only after construction, so
/// concurrent dispatches need no locking.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Process one raw request body and produce exactly one response.
    pub async fn dispatch(&self, body: Value) -> JsonRpcResponse {
        let req = match parse_envelope(body) {
            Ok(req) => req,
            Err(resp) => return *resp,
        };

        match req.method.as_str() {
            METHOD_TOOLS_LIST => self.tools_list(&req),
            METHOD_TOOLS_CALL => self.tools_call(&req).await,
            other => JsonRpcResponse::error(
                req.id.clone(),
                METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            ),
        }
    }

    /// `tools/list` ignores params entirely, malformed or not.
    fn tools_list(&self, req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({ "tools": self.registry.list() }))
    }

    async fn tools_call(&self, req: &JsonRpcRequest) -> JsonRpcResponse {
        let (name, arguments) = match parse_call_params(req.params.as_ref()) {
            Ok(parsed) => parsed,
            Err(reason) => {
                return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, reason);
            }
        };

        let Some(tool) = self.registry.find(&name) else {
            return JsonRpcResponse::error(
                req.id.clone(),
                INVALID_PARAMS,
                format!("tool not found: {name}"),
            );
        };

        let args = match schema::validate(&tool.input_schema(), &arguments) {
            Ok(args) => args,
            Err(err) => {
                return JsonRpcResponse::error_with_data(
                    req.id.clone(),
                    INVALID_PARAMS,
                    err.to_string(),
                    Some(json!(err.errors)),
                );
            }
        };

        match tool.invoke(args).await {
            Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
            Err(err) => {
                tracing::warn!(tool = %name, error = %err, "tool execution failed");
                JsonRpcResponse::error(req.id.clone(), INTERNAL_ERROR, err.message())
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Stage 1: the raw body must be an object with `jsonrpc == "2.0"`, a
/// string `method`, and a string or number `id`.
///
/// The error response echoes the request `id` when it is recoverable from
/// the body, `null` otherwise.
fn parse_envelope(body: Value) -> Result<JsonRpcRequest, Box<JsonRpcResponse>> {
    let Value::Object(obj) = body else {
        return Err(invalid_request(
            Value::Null,
            "request body must be a JSON object",
        ));
    };

    let id = match obj.get("id") {
        Some(id @ (Value::String(_) | Value::Number(_))) => id.clone(),
        Some(_) | None => Value::Null,
    };

    if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Err(invalid_request(id, "jsonrpc version must be \"2.0\""));
    }

    let Some(method) = obj.get("method").and_then(Value::as_str) else {
        return Err(invalid_request(id, "method must be a string"));
    };

    if id.is_null() {
        return Err(invalid_request(
            Value::Null,
            "id must be a string or number",
        ));
    }

    Ok(JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id,
        method: method.to_string(),
        params: obj.get("params").cloned(),
    })
}

fn invalid_request(id: Value, reason: &str) -> Box<JsonRpcResponse> {
    Box::new(JsonRpcResponse::error(id, INVALID_REQUEST, reason))
}

/// Stage 2 (call branch): `params.name` must be a string; `params.arguments`
/// defaults to `{}` when absent.
fn parse_call_params(params: Option<&Value>) -> Result<(String, Value), String> {
    let Some(params) = params.filter(|p| !p.is_null()) else {
        return Err("missing params".to_string());
    };

    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return Err("params.name must be a string".to_string());
    };

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(args @ Value::Object(_)) => args.clone(),
        Some(_) => return Err("params.arguments must be an object".to_string()),
    };

    Ok((name.to_string(), arguments))
}
