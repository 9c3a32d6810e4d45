//! Host metrics broadcaster - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hostpulse_agent::{AppConfig, Application};

/// Live host-metrics broadcaster.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server role tag reported to clients, e.g. "database" or "app".
    #[arg(long)]
    server: Option<String>,

    /// Port to run the monitoring endpoint on.
    #[arg(long)]
    port: Option<u16>,

    /// Snapshot interval in seconds.
    #[arg(long)]
    interval: Option<u64>,

    /// Configuration file path (can also be set via HOSTPULSE_CONFIG).
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    hostpulse_telemetry::init_logging()?;

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(server) = args.server {
        config.server_type = server;
    }
    if let Some(port) = args.port {
        config.hub.port = port;
    }
    if let Some(interval) = args.interval {
        config.hub.interval_secs = interval;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        server_type = %config.server_type,
        port = config.hub.port,
        "Starting hostpulse agent"
    );

    Application::new(config).run().await?;

    Ok(())
}
