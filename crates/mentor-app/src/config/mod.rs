//! Configuration for Code Mentor
//!
//! Supports:
//! - `~/.config/code-mentor/config.toml` - Global settings
//! - Startup resolution of the API credential from the environment

pub mod settings;
pub mod startup;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME};
pub use startup::StartupConfig;
pub use types::*;
