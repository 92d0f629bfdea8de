//! Construction-time configuration for the explanation client

use std::fmt;
use std::time::Duration;

use mentor_core::prelude::*;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything a backend needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config, validating the base URL.
    pub fn new(
        api_key: ApiKey,
        model: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(Error::config_invalid("model name must not be empty"));
        }
        if timeout.is_zero() {
            return Err(Error::config_invalid("request timeout must be greater than zero"));
        }

        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("invalid base_url '{base_url}': {e}")))?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    /// Config with default model, endpoint and timeout.
    pub fn with_defaults(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// `{base_url}/models/{model}:generateContent`
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            self.model
        )
    }
}
