use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Completion request failed: {0}")]
    Upstream(#[from] LlmError),
}
