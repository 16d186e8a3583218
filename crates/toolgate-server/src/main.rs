use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use toolgate_core::ToolRegistry;
use toolgate_rpc::Dispatcher;

use toolgate_server::app_state::AppState;
use toolgate_server::config::ServerConfig;
use toolgate_server::model::{HttpModel, LanguageModel};
use toolgate_server::{demo, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|err| {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    });

    let registry = ToolRegistry::new(demo::demo_tools()).unwrap_or_else(|err| {
        eprintln!("configuration error: {err}");
        std::process::exit(1);
    });
    tracing::info!(tools = registry.len(), "tool registry built");

    let model = config
        .model
        .clone()
        .map(|m| Arc::new(HttpModel::new(m)) as Arc<dyn LanguageModel>);
    if model.is_none() {
        tracing::info!("no model configured; /generate will answer 400");
    }

    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(Arc::new(registry))),
        model,
        token: config.token.clone(),
    };

    let app = router::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("toolgate server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
