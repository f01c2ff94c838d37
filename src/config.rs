//! Configuration loaded from `pdflow.toml`.
//!
//! [`PdflowConfig`] holds the service credentials and polling parameters.
//! Values absent from the file fall back to sensible defaults. The
//! `PDF_SERVICES_CLIENT_ID` and `PDF_SERVICES_CLIENT_SECRET` environment
//! variables take precedence over the file so credentials can stay out of
//! checked-in config.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::job::PollPolicy;
use crate::service::SERVICE_URL;

/// Top-level configuration loaded from `pdflow.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PdflowConfig {
    /// Service client id (doubles as the API key header).
    #[serde(default)]
    pub client_id: String,

    /// Service client secret, exchanged for a bearer token at startup.
    #[serde(default)]
    pub client_secret: String,

    /// Base URL of the document-processing service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of status poll attempts before giving up.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    /// Wait between status poll attempts, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    SERVICE_URL.to_string()
}

fn default_max_poll_attempts() -> u32 {
    30
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl Default for PdflowConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: default_base_url(),
            max_poll_attempts: default_max_poll_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PdflowConfig {
    /// Load configuration from `pdflow.toml` in the current directory,
    /// falling back to defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("pdflow.toml"))
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<PdflowConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variables take precedence over the file for credentials.
        if let Ok(id) = std::env::var("PDF_SERVICES_CLIENT_ID")
            && !id.is_empty()
        {
            config.client_id = id;
        }
        if let Ok(secret) = std::env::var("PDF_SERVICES_CLIENT_SECRET")
            && !secret.is_empty()
        {
            config.client_secret = secret;
        }

        Ok(config)
    }

    /// Polling parameters as a [`PollPolicy`] for the orchestrator.
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.max_poll_attempts,
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}
