//! Gemini `generateContent` REST backend

use mentor_core::prelude::*;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{Backend, BackendError};
use crate::config::ClientConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";
const RESPONSE_MIME_TYPE: &str = "application/json";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    config: ClientConfig,
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
    #[serde(default)]
    total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

impl GeminiBackend {
    pub fn new(config: ClientConfig) -> std::result::Result<Self, BackendError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let endpoint = config.generate_content_url();

        Ok(Self {
            config,
            client,
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

impl Backend for GeminiBackend {
    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> std::result::Result<Option<String>, BackendError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: schema,
            },
        };

        debug!(model = %self.config.model, "Sending generateContent request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))?;

        if let Some(usage) = &parsed.usage_metadata {
            info!(
                "Gemini token usage - prompt: {:?}, candidates: {:?}, total: {:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            debug!("Gemini finish reason: {}", reason);
        }

        Ok(parsed.text())
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> GeminiBackend {
        let config = ClientConfig::new(
            ApiKey::new("test-key"),
            "gemini-2.5-flash",
            &server.uri(),
            Duration::from_secs(5),
        )
        .unwrap();
        GeminiBackend::new(config).unwrap()
    }

    async fn generate_via(
        backend: &GeminiBackend,
    ) -> std::result::Result<Option<String>, BackendError> {
        backend
            .generate("prompt text", &serde_json::json!({"type": "OBJECT"}))
            .await
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [{"text": "prompt text"}]}],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {"type": "OBJECT"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 10, "totalTokenCount": 20}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = generate_via(&backend_for(&server)).await.unwrap();
        assert_eq!(text.as_deref(), Some("{\"a\":1}"));
    }

    #[tokio::test]
    async fn test_generate_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = generate_via(&backend_for(&server)).await.unwrap_err();
        match err {
            BackendError::Status { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_no_candidates_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let text = generate_via(&backend_for(&server)).await.unwrap();
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn test_generate_undecodable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = generate_via(&backend_for(&server)).await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn test_response_text_skips_textless_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"inlineData": {}}, {"text": "ok"}]}}]
        }))
        .unwrap();
        assert_eq!(parsed.text().as_deref(), Some("ok"));
    }

    #[test]
    fn test_name_is_model() {
        let config = ClientConfig::with_defaults(ApiKey::new("k"));
        let backend = GeminiBackend::new(config).unwrap();
        assert_eq!(Backend::name(&backend), "gemini-2.5-flash");
        assert_eq!(backend.model(), "gemini-2.5-flash");
    }
}
