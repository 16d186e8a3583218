use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::app_state::AppState;
use crate::model::ModelError;

/// Proxy a generate call to the configured language model.
///
/// Without a configured model the route answers 400; provider failures are
/// logged server-side and surfaced as the provider's status when it is a
/// valid one, 502 otherwise.
pub async fn generate(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(model) = &state.model else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "no model configured" })),
        )
            .into_response();
    };

    match model.generate(body).await {
        Ok(result) => Json(result).into_response(),
        Err(ModelError::Provider(status)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "error": "model provider error" }))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "generate request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "model request failed" })),
            )
                .into_response()
        }
    }
}
