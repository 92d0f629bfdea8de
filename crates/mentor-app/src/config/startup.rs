//! Startup configuration: settings plus the resolved API credential.
//!
//! This is the only place the environment is read. A missing credential is a
//! fatal startup error and never reaches the submission state.

use std::time::Duration;

use mentor_client::{ApiKey, ClientConfig};
use mentor_core::prelude::*;

use super::types::Settings;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings: Settings,
    pub api_key: ApiKey,
}

impl StartupConfig {
    /// Resolve the credential from the first non-empty variable in
    /// `settings.backend.api_key_env`, looked up through `lookup`.
    pub fn resolve<F>(settings: Settings, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if settings.backend.api_key_env.is_empty() {
            return Err(Error::config_invalid(
                "backend.api_key_env must name at least one environment variable",
            ));
        }

        let found = settings.backend.api_key_env.iter().find_map(|var| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (var, value))
        });

        match found {
            Some((var, value)) => {
                info!("Using API key from ${}", var);
                Ok(Self {
                    api_key: ApiKey::new(value.trim()),
                    settings,
                })
            }
            None => Err(Error::missing_credential(&settings.backend.api_key_env)),
        }
    }

    /// [`resolve`](Self::resolve) against the process environment.
    pub fn from_env(settings: Settings) -> Result<Self> {
        Self::resolve(settings, |var| std::env::var(var).ok())
    }

    /// Client configuration for the explanation backend.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let backend = &self.settings.backend;
        ClientConfig::new(
            self.api_key.clone(),
            backend.model.clone(),
            &backend.base_url,
            Duration::from_secs(backend.timeout_secs),
        )
    }
}
