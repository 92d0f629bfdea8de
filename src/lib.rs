//! Code Mentor library
//!
//! Wires settings, the startup credential, the Gemini-backed explanation
//! client and the engine together, then hands off to the TUI or the headless
//! runner.

pub mod headless;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mentor_app::config::{self, StartupConfig};
use mentor_app::{AppState, Engine};
use mentor_client::{ExplanationClient, GeminiBackend};
use mentor_core::prelude::*;

pub use headless::runner::run_headless;

/// What the binary was asked to do.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Snippet to preload; `-` reads stdin
    pub path: Option<PathBuf>,
    pub headless: bool,
    /// Overrides `backend.model` from the config file
    pub model: Option<String>,
}

/// The explainer used outside of tests.
pub type GeminiExplainer = ExplanationClient<GeminiBackend>;

/// Main application entry point
pub async fn run(options: Options) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    mentor_core::logging::init()?;

    let mut settings = config_dir()
        .map(|dir| config::load_settings(&dir))
        .unwrap_or_default();
    if let Some(model) = options.model {
        info!("Model overridden on the command line: {}", model);
        settings.backend.model = model;
    }

    let startup = StartupConfig::from_env(settings).context("Startup configuration failed")?;
    let explainer = build_explainer(&startup)?;

    let initial_code = options.path.as_deref().map(read_code).transpose()?;

    let result = if options.headless {
        let code = match initial_code {
            Some(code) => code,
            None => read_stdin()?,
        };
        let state = AppState::with_settings(startup.settings, Some(code));
        run_headless(Engine::new(state, explainer)).await
    } else {
        let state = AppState::with_settings(startup.settings, initial_code);
        mentor_tui::run(Engine::new(state, explainer)).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Code Mentor exiting");
    result
}

/// Create the config directory with a commented default `config.toml`.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()
        .ok_or_else(|| Error::config("Could not determine the user config directory"))?;
    config::init_config_dir(&dir)
}

/// Build the explanation client from the startup configuration.
pub fn build_explainer(startup: &StartupConfig) -> Result<Arc<GeminiExplainer>> {
    let backend = GeminiBackend::new(startup.client_config()?)
        .map_err(|e| Error::config_invalid(e.to_string()))?;
    info!("Explanation backend ready (model: {})", backend.model());
    Ok(Arc::new(ExplanationClient::new(backend)))
}

/// Read the snippet at `path`; `-` means stdin.
pub fn read_code(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_stdin();
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut code = String::new();
    std::io::stdin().read_to_string(&mut code)?;
    Ok(code)
}

fn config_dir() -> Option<PathBuf> {
    let dir = config::default_config_dir();
    if dir.is_none() {
        warn!("No user config directory; using default settings");
    }
    dir
}
