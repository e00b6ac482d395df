//! Completion provider abstraction for the generation pipeline.
//!
//! This module provides a trait-based abstraction over completion services
//! (OpenAI-compatible endpoints, a fake for testing) so the generation code
//! never talks to a concrete API directly.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use base64::Engine;
use std::fmt;
use thiserror::Error;

use crate::config::ProviderConfig;

/// Error type for completion-service operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Empty response from completion service")]
    EmptyResponse,

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Base64-encoded image payload for photo analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// MIME type, e.g. "image/jpeg".
    pub media_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

impl ImageData {
    /// Encode raw bytes for transport.
    pub fn from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// One completion call: a system instruction, a user instruction, and an
/// optional image attached to the user turn.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub image: Option<ImageData>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// If true, ask the service for JSON response format where supported.
    pub json_response: bool,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            image: None,
            max_tokens: 4096,
            temperature: 0.7,
            json_response: false,
        }
    }

    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_json_response(mut self) -> Self {
        self.json_response = true;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Trait for completion providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's raw text
/// reply; parsing and normalization happen in the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Send a request to the completion service and get a text response.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Registry of available providers.
///
/// Use environment variables to configure:
/// - CHEFGPT_PROVIDER: "openai" | "fake"
/// - CHEFGPT_MODEL: Model name (provider-specific)
/// - OPENAI_API_KEY: API key for the OpenAI-compatible endpoint
pub fn create_provider_from_env() -> Result<Box<dyn CompletionProvider>, LlmError> {
    let provider = std::env::var("CHEFGPT_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "openai" => {
            let config = ProviderConfig::from_env()?;
            Ok(Box::new(OpenAiProvider::new(config)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
