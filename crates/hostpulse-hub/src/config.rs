//! Hub and listener configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the broadcast hub and its WebSocket listener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sampling interval in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Per-client write deadline in milliseconds. An expired deadline counts
    /// as a failed send and unregisters the client.
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,
}

fn default_port() -> u16 {
    9800
}

fn default_interval_secs() -> u64 {
    2
}

fn default_write_timeout_ms() -> u64 {
    1000
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            interval_secs: default_interval_secs(),
            write_timeout_ms: default_write_timeout_ms(),
        }
    }
}

impl HubConfig {
    /// Sampling interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Write deadline as a `Duration`.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: HubConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 9800);
        assert_eq!(config.interval_secs, 2);
        assert_eq!(config.write_timeout_ms, 1000);
    }

    #[test]
    fn durations_match_fields() {
        let config = HubConfig {
            port: 9800,
            interval_secs: 5,
            write_timeout_ms: 250,
        };
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(config.write_timeout(), Duration::from_millis(250));
    }
}
