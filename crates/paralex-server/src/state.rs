use std::sync::Arc;

use paralex_openai::OpenAiClient;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared application state, injected into all route handlers via Axum
/// state. The upstream client is built once at startup when a credential
/// is present.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    openai: Option<OpenAiClient>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> eyre::Result<Self> {
        let openai = match &config.api_key {
            Some(key) => Some(
                OpenAiClient::with_base_url(key, &config.base_url)
                    .map_err(|e| eyre::eyre!("failed to build upstream client: {e}"))?,
            ),
            None => None,
        };

        Ok(AppState {
            config: Arc::new(config),
            openai,
        })
    }

    /// The upstream client, or a configuration error when no credential
    /// was provided. Checked before any request does file or network I/O.
    pub fn openai(&self) -> Result<&OpenAiClient, ApiError> {
        self.openai.as_ref().ok_or(ApiError::Configuration)
    }
}
