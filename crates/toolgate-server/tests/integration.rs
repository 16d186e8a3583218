use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};

use toolgate_core::ToolRegistry;
use toolgate_rpc::Dispatcher;

use toolgate_server::app_state::AppState;
use toolgate_server::model::{LanguageModel, ModelError};
use toolgate_server::{demo, router};

const TOKEN: &str = "test-token";

fn build_test_app(model: Option<Arc<dyn LanguageModel>>) -> TestServer {
    let registry = ToolRegistry::new(demo::demo_tools()).unwrap();
    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(Arc::new(registry))),
        model,
        token: TOKEN.to_string(),
    };
    TestServer::new(router::create_router(state)).unwrap()
}

/// Stub model echoing the request body back under `"received"`.
struct StubModel;

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, request: Value) -> Result<Value, ModelError> {
        Ok(json!({ "received": request }))
    }
}

#[tokio::test]
async fn health_check_is_public() {
    let server = build_test_app(None);
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn landing_page_is_public() {
    let server = build_test_app(None);
    let resp = server.get("/").await;
    resp.assert_status_ok();
    assert!(resp.text().contains("toolgate"));
}

#[tokio::test]
async fn mcp_requires_bearer_token() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;
    resp.assert_status_unauthorized();

    let resp = server
        .post("/mcp")
        .authorization_bearer("wrong-token")
        .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;
    resp.assert_status_unauthorized();
}

#[tokio::test]
async fn auth_probe_returns_empty_object() {
    let server = build_test_app(None);

    server.get("/auth").await.assert_status_unauthorized();

    let resp = server.get("/auth").authorization_bearer(TOKEN).await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn tools_list_in_registration_order() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["echo", "calculator", "weather"]);
}

#[tokio::test]
async fn call_echo_round_trips() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": "req-1",
            "method": "tools/call",
            "params": { "name": "echo", "arguments": { "message": "hi" } }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], "req-1");
    assert_eq!(body["result"], json!({ "echo": "hi" }));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn divide_by_zero_surfaces_execution_error() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {
                "name": "calculator",
                "arguments": { "operation": "divide", "a": 5, "b": 0 }
            }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["error"]["message"], "cannot divide by zero");
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "nonexistent", "arguments": {} }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["id"], 3);
    assert!(body.get("result").is_none());
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("nonexistent"));
}

#[tokio::test]
async fn invalid_arguments_report_the_field() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": { "name": "echo", "arguments": {} }
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["data"][0]["path"], "message");
}

#[tokio::test]
async fn unknown_method_is_rejected() {
    let server = build_test_app(None);

    let resp = server
        .post("/mcp")
        .authorization_bearer(TOKEN)
        .json(&json!({ "jsonrpc": "2.0", "id": 5, "method": "resources/list" }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn generate_without_model_returns_400() {
    let server = build_test_app(None);

    let resp = server
        .post("/generate")
        .authorization_bearer(TOKEN)
        .json(&json!({ "messages": [] }))
        .await;

    resp.assert_status_bad_request();
    let body: Value = resp.json();
    assert_eq!(body["error"], "no model configured");
}

#[tokio::test]
async fn generate_forwards_to_the_model() {
    let server = build_test_app(Some(Arc::new(StubModel)));

    let resp = server
        .post("/generate")
        .authorization_bearer(TOKEN)
        .json(&json!({ "messages": [{ "role": "user", "content": "hello" }] }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["received"]["messages"][0]["content"], "hello");
}

#[tokio::test]
async fn generate_requires_bearer_token() {
    let server = build_test_app(Some(Arc::new(StubModel)));

    let resp = server
        .post("/generate")
        .json(&json!({ "messages": [] }))
        .await;
    resp.assert_status_unauthorized();
}
