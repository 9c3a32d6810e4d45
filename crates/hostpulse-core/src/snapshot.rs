//! Host metrics snapshot.

use serde::{Deserialize, Serialize};

/// One complete set of sampled host metrics for a single tick.
///
/// The serde field names are the wire contract: each connected client
/// receives this object as one JSON text message per tick. Snapshots are
/// constructed fresh by the provider every tick and are not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Best-effort non-loopback IPv4 address of this host, or "0.0.0.0"
    /// when it cannot be determined.
    #[serde(rename = "ip")]
    pub host_ip: String,
    /// Instantaneous CPU utilization in percent.
    #[serde(rename = "cpuUsage")]
    pub cpu_usage_percent: f64,
    /// Memory utilization in percent.
    #[serde(rename = "ramUsage")]
    pub ram_usage_percent: f64,
    /// 1-minute load average. 0.0 on platforms without the concept.
    pub load1: f64,
    /// 5-minute load average.
    pub load5: f64,
    /// 15-minute load average.
    pub load15: f64,
    /// Operator-supplied role tag for this instance (e.g. "database").
    #[serde(rename = "serverType")]
    pub server_label: String,
}
