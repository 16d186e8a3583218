use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Credential probe. Reaching this handler at all means the bearer
/// middleware accepted the token, so the body carries nothing.
pub async fn auth_probe() -> Json<Value> {
    Json(json!({}))
}

/// Minimal landing page listing the API surface.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r"<!DOCTYPE html>
<html lang='en'>
<head>
  <meta charset='UTF-8'>
  <meta name='viewport' content='width=device-width, initial-scale=1.0'>
  <title>toolgate</title>
</head>
<body>
  <h1>toolgate</h1>
  <p>Schema-typed tools over JSON-RPC.</p>
  <ul>
    <li><code>GET /health</code> - liveness</li>
    <li><code>GET /auth</code> - credential probe (Bearer token)</li>
    <li><code>POST /mcp</code> - JSON-RPC: tools/list, tools/call</li>
    <li><code>POST /generate</code> - language-model proxy</li>
  </ul>
</body>
</html>
";
