use async_trait::async_trait;
use serde_json::Value;

use crate::config::ModelConfig;

/// Failure while proxying a generate call to the provider.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model provider returned status {0}")]
    Provider(u16),

    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Language-model collaborator behind the `/generate` route.
///
/// The server only forwards a JSON request body and returns the provider's
/// JSON response; prompt construction and response shape belong to the
/// caller and the provider.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, request: Value) -> Result<Value, ModelError>;
}

/// Pass-through to an HTTP provider with an `x-api-key` header.
pub struct HttpModel {
    client: reqwest::Client,
    config: ModelConfig,
}

impl HttpModel {
    #[must_use]
    pub fn new(config: ModelConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LanguageModel for HttpModel {
    async fn generate(&self, mut request: Value) -> Result<Value, ModelError> {
        // Fill in the configured model name unless the caller set one.
        if let (Some(model), Some(body)) = (&self.config.model, request.as_object_mut()) {
            body.entry("model")
                .or_insert_with(|| Value::String(model.clone()));
        }

        let mut outbound = self.client.post(&self.config.url).json(&request);
        if let Some(api_key) = &self.config.api_key {
            outbound = outbound.header("x-api-key", api_key);
        }

        let response = outbound.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body, "model provider error");
            return Err(ModelError::Provider(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
