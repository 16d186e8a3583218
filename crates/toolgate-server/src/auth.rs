//! Bearer-token gate for the RPC-bearing routes.
//!
//! Runs before any request body reaches the dispatcher; the dispatcher
//! itself never sees an unauthenticated request and never evaluates the
//! token.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::app_state::AppState;

pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match bearer_token(&req) {
        Some(token) if token == state.token => next.run(req).await,
        Some(_) => {
            tracing::warn!("rejected request with wrong bearer token");
            unauthorized()
        }
        None => unauthorized(),
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized" })),
    )
        .into_response()
}
