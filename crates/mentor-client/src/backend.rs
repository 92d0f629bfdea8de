//! Backend trait for generative-AI text services

use serde_json::Value;
use thiserror::Error;

/// Failure talking to a generative-AI backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

/// One prompt plus response schema in, one text payload out.
///
/// `Ok(None)` means the call succeeded but the service produced no text.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    async fn generate(&self, prompt: &str, schema: &Value)
        -> Result<Option<String>, BackendError>;

    /// Short identifier for logs and the header bar.
    fn name(&self) -> &str;
}
