use axum::extract::State;
use axum::Json;
use serde_json::Value;

use toolgate_rpc::JsonRpcResponse;

use crate::app_state::AppState;

/// Hand the raw JSON-RPC body to the dispatcher and write its response.
///
/// The dispatcher maps every failure to a well-formed JSON-RPC error, so
/// this handler always answers 200 with an envelope.
pub async fn rpc(State(state): State<AppState>, Json(body): Json<Value>) -> Json<JsonRpcResponse> {
    Json(state.dispatcher.dispatch(body).await)
}
