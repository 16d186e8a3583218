use std::sync::Arc;

use toolgate_rpc::Dispatcher;

use crate::model::LanguageModel;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub model: Option<Arc<dyn LanguageModel>>,
    pub token: String,
}
