//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hostpulse_hub::HubConfig;

use crate::error::{AgentError, AgentResult};

/// Top-level configuration for the monitoring agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Role tag reported in every snapshot (e.g. "database", "app").
    #[serde(default = "default_server_type")]
    pub server_type: String,
    /// Hub and listener settings.
    #[serde(default)]
    pub hub: HubConfig,
}

fn default_server_type() -> String {
    "database".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_type: default_server_type(),
            hub: HubConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist; otherwise `HOSTPULSE_CONFIG` or the
    /// default path is tried, falling back to defaults when absent.
    pub fn load(explicit_path: Option<&str>) -> AgentResult<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let path = std::env::var("HOSTPULSE_CONFIG")
            .unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&path).exists() {
            Self::from_file(&path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AgentResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AgentError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AgentError::Config(format!("Failed to parse config: {e}")))
    }
}
