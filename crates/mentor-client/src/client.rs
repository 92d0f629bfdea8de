//! Explanation client: prompt, call, validate

use mentor_core::prelude::*;
use mentor_core::{CodeExplanation, ExplainError};
use serde_json::Value;

use crate::backend::Backend;
use crate::prompt;

/// Produces a structured explanation for a snippet.
///
/// The application layer depends on this trait only, so tests and headless
/// runs can swap in any implementation.
#[trait_variant::make(Explainer: Send)]
pub trait LocalExplainer {
    async fn explain(&self, code: &str) -> std::result::Result<CodeExplanation, ExplainError>;
}

/// [`Explainer`] over any [`Backend`].
#[derive(Debug)]
pub struct ExplanationClient<B> {
    backend: B,
    schema: Value,
}

impl<B: Backend> ExplanationClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            schema: prompt::response_schema(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend + Sync> Explainer for ExplanationClient<B> {
    async fn explain(&self, code: &str) -> std::result::Result<CodeExplanation, ExplainError> {
        let prompt = prompt::build_prompt(code);
        debug!(
            backend = self.backend.name(),
            code_len = code.len(),
            "Requesting explanation"
        );

        let text = match self.backend.generate(&prompt, &self.schema).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                error!("Error calling {}: empty response text", self.backend.name());
                return Err(ExplainError::transport(
                    "The AI returned an empty or invalid response text.",
                ));
            }
            Err(e) => {
                error!("Error calling {}: {}", self.backend.name(), e);
                return Err(ExplainError::transport(e.to_string()));
            }
        };

        parse_explanation(&text)
    }
}

/// Parse a backend payload, trimming surrounding whitespace first.
pub fn parse_explanation(text: &str) -> std::result::Result<CodeExplanation, ExplainError> {
    serde_json::from_str(text.trim()).map_err(|e| {
        error!("Backend payload is not a valid explanation: {}", e);
        ExplainError::format(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::{Explainer, ExplanationClient};
    use crate::backend::BackendError;
    use crate::test_utils::{sample_explanation, sample_explanation_json, ScriptedBackend};
    use mentor_core::{ExplainError, FORMAT_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE};

    #[tokio::test]
    async fn test_explain_success() {
        let backend = ScriptedBackend::new().with_text(sample_explanation_json());
        let client = ExplanationClient::new(backend);

        let explanation = client.explain("const x = 1;").await.unwrap();
        assert_eq!(explanation, sample_explanation());
    }

    #[tokio::test]
    async fn test_explain_sends_prompt_with_code() {
        let backend = ScriptedBackend::new().with_text(sample_explanation_json());
        let client = ExplanationClient::new(backend);

        client.explain("let answer = 42;").await.unwrap();

        let prompts = client.backend().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("let answer = 42;"));
    }

    #[tokio::test]
    async fn test_explain_trims_payload() {
        let padded = format!("\n\n  {}  \n", sample_explanation_json());
        let client = ExplanationClient::new(ScriptedBackend::new().with_text(padded));

        assert!(client.explain("x").await.is_ok());
    }

    #[tokio::test]
    async fn test_explain_transport_failure() {
        let backend = ScriptedBackend::new().with_error(BackendError::Status {
            status: 403,
            body: "API key not valid".to_string(),
        });
        let client = ExplanationClient::new(backend);

        let err = client.explain("x").await.unwrap_err();
        assert!(matches!(err, ExplainError::Transport { .. }));
        assert_eq!(err.to_string(), TRANSPORT_FAILURE_MESSAGE);
        assert!(err.cause().contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_explain_no_text_is_transport_failure() {
        let client = ExplanationClient::new(ScriptedBackend::new().with_empty());

        let err = client.explain("x").await.unwrap_err();
        assert!(matches!(err, ExplainError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_explain_blank_text_is_transport_failure() {
        let client = ExplanationClient::new(ScriptedBackend::new().with_text("   \n"));

        let err = client.explain("x").await.unwrap_err();
        assert!(matches!(err, ExplainError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_explain_malformed_json_is_format_failure() {
        let client = ExplanationClient::new(ScriptedBackend::new().with_text("{not json"));

        let err = client.explain("x").await.unwrap_err();
        assert!(matches!(err, ExplainError::Format { .. }));
        assert_eq!(err.to_string(), FORMAT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_explain_missing_field_is_format_failure() {
        let client = ExplanationClient::new(
            ScriptedBackend::new().with_text(r#"{"initialQuestion": "Why?"}"#),
        );

        let err = client.explain("x").await.unwrap_err();
        assert!(matches!(err, ExplainError::Format { .. }));
    }
}
