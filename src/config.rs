//! Provider configuration from environment variables.

use std::env;

use crate::llm::LlmError;

/// Default OpenAI-compatible base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Completion provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key for the OpenAI-compatible endpoint.
    pub api_key: String,
    /// Model name (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a configuration with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for the endpoint
    ///
    /// Optional:
    /// - `CHEFGPT_MODEL`: Model name (default: "gpt-4o-mini")
    /// - `CHEFGPT_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    /// - `CHEFGPT_TIMEOUT_SECS`: Request timeout in seconds (default: 60)
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        let model = env::var("CHEFGPT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("CHEFGPT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("CHEFGPT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        })
    }
}
