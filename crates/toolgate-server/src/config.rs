/// Server configuration, read from the environment at startup.
///
/// The bearer token has no default on purpose; the process refuses to start
/// without one rather than fall back to a well-known credential.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub token: String,
    pub model: Option<ModelConfig>,
}

/// Upstream language-model provider, if one is configured.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOOLGATE_TOKEN is not set; refusing to start without a bearer token")]
    MissingToken,

    #[error("invalid TOOLGATE_PORT: {0}")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Read configuration from `TOOLGATE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails when the token is absent or empty, or the port does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("TOOLGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("TOOLGATE_PORT").unwrap_or_else(|_| "3000".to_string());
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;

        let token = std::env::var("TOOLGATE_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let model = std::env::var("TOOLGATE_MODEL_URL").ok().map(|url| ModelConfig {
            url,
            api_key: std::env::var("TOOLGATE_MODEL_API_KEY").ok(),
            model: std::env::var("TOOLGATE_MODEL").ok(),
        });

        Ok(Self {
            host,
            port,
            token,
            model,
        })
    }
}
