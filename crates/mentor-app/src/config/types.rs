//! Configuration types for Code Mentor
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `BackendSettings` - Generative-AI backend selection
//! - `UiSettings` - Terminal UI behaviour

use serde::{Deserialize, Serialize};

use mentor_client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Model name passed in the request path
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without the `/models/...` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variables checked, in order, for the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Pre-fill the editor with the House Robber sample
    #[serde(default = "default_true")]
    pub preload_sample: bool,

    /// Event poll interval; also drives animations
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            preload_sample: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_api_key_env() -> Vec<String> {
    vec!["API_KEY".to_string(), "GEMINI_API_KEY".to_string()]
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.backend.model, "gemini-2.5-flash");
        assert_eq!(
            settings.backend.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(settings.backend.timeout_secs, 120);
        assert_eq!(settings.backend.api_key_env, vec!["API_KEY", "GEMINI_API_KEY"]);
        assert!(settings.ui.preload_sample);
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[backend]
model = "gemini-2.5-pro"
"#,
        )
        .unwrap();

        assert_eq!(settings.backend.model, "gemini-2.5-pro");
        assert_eq!(settings.backend.timeout_secs, 120);
        assert!(settings.ui.preload_sample);
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }
}
