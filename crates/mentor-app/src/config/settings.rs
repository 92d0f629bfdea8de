//! Settings parser for ~/.config/code-mentor/config.toml

use super::types::Settings;
use mentor_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "code-mentor";

const DEFAULT_CONFIG: &str = r#"# Code Mentor Configuration

[backend]
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"
timeout_secs = 120
# Checked in order; the first non-empty variable supplies the API key
api_key_env = ["API_KEY", "GEMINI_API_KEY"]

[ui]
preload_sample = true   # Start with the House Robber example in the editor
tick_rate_ms = 50
"#;

/// `<config_dir>/code-mentor`, if the platform has a config directory.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config.toml unless one already exists.
///
/// Returns the config file path.
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(config_path);
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Wrote default config to {:?}", config_path);

    Ok(config_path)
}
