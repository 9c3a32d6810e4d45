//! Application assembly: sampler, hub and listener wiring.

use tracing::info;

use hostpulse_hub::{run_server, HubTask};
use hostpulse_sampler::SystemSampler;

use crate::config::AppConfig;
use crate::error::AgentResult;

/// The running agent: one hub task plus the WebSocket listener.
pub struct Application {
    config: AppConfig,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run until the listener fails or the process is terminated.
    pub async fn run(self) -> AgentResult<()> {
        let sampler = SystemSampler::new(self.config.server_type.clone());
        let (hub, handle) = HubTask::new(Box::new(sampler), &self.config.hub);
        tokio::spawn(hub.run());

        info!(
            server_type = %self.config.server_type,
            port = self.config.hub.port,
            interval_secs = self.config.hub.interval_secs,
            "Monitoring hub started"
        );

        run_server(handle, &self.config.hub).await?;

        Ok(())
    }
}
