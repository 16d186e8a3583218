use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::{auth, handlers};

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Everything that can reach the dispatcher or the model sits behind the
    // bearer gate; the landing page and health check stay public.
    let protected = Router::new()
        .route("/auth", get(handlers::auth_probe))
        .route("/mcp", post(handlers::rpc))
        .route("/generate", post(handlers::generate))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .merge(protected)
        // CORS: allow any origin (browser clients run on arbitrary hosts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
