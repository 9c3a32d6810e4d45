//! Host sampling through sysinfo.

use local_ip_address::local_ip;
use sysinfo::{LoadAvg, System};
use tracing::debug;

use hostpulse_core::{MetricsProvider, MetricsSnapshot, SampleError};

/// Sentinel reported when no usable local address can be determined.
const UNKNOWN_IP: &str = "0.0.0.0";

/// Samples host CPU, memory and load statistics.
///
/// Maintains a reusable `sysinfo::System` so CPU usage deltas have a stable
/// baseline between ticks. The constructor performs a priming refresh;
/// without it the first sample would report 0% CPU on every platform.
pub struct SystemSampler {
    sys: System,
    server_label: String,
}

impl SystemSampler {
    /// Create a sampler reporting under the given role tag.
    pub fn new(server_label: impl Into<String>) -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        Self {
            sys,
            server_label: server_label.into(),
        }
    }
}

impl MetricsProvider for SystemSampler {
    fn sample(&mut self) -> Result<MetricsSnapshot, SampleError> {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        if self.sys.cpus().is_empty() {
            return Err(SampleError::CpuUnavailable);
        }
        let cpu_usage_percent = f64::from(self.sys.global_cpu_info().cpu_usage());

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(SampleError::MemoryUnavailable);
        }
        let ram_usage_percent = self.sys.used_memory() as f64 / total as f64 * 100.0;

        let load = load_average();

        Ok(MetricsSnapshot {
            host_ip: resolve_host_ip(),
            cpu_usage_percent,
            ram_usage_percent,
            load1: load.one,
            load5: load.five,
            load15: load.fifteen,
            server_label: self.server_label.clone(),
        })
    }
}

/// Load averages, defined as 0.0 where the platform has no concept
/// (Windows).
fn load_average() -> LoadAvg {
    if cfg!(unix) {
        System::load_average()
    } else {
        LoadAvg {
            one: 0.0,
            five: 0.0,
            fifteen: 0.0,
        }
    }
}

/// Best-effort local IP, falling back to the sentinel.
fn resolve_host_ip() -> String {
    match local_ip() {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            debug!(error = %e, "Local IP unresolved, using sentinel");
            UNKNOWN_IP.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_metrics_without_nan() {
        let mut sampler = SystemSampler::new("app");
        let snapshot = sampler.sample().unwrap();

        assert!(
            snapshot.cpu_usage_percent.is_finite(),
            "CPU percent should always be finite"
        );
        assert!(snapshot.cpu_usage_percent >= 0.0);
        assert!(snapshot.ram_usage_percent.is_finite());
        assert!((0.0..=100.0).contains(&snapshot.ram_usage_percent));
        assert!(snapshot.load1.is_finite());
        assert!(snapshot.load5.is_finite());
        assert!(snapshot.load15.is_finite());
    }

    #[test]
    fn label_is_passed_through() {
        let mut sampler = SystemSampler::new("database");
        let snapshot = sampler.sample().unwrap();
        assert_eq!(snapshot.server_label, "database");
    }

    #[test]
    fn host_ip_is_parseable_or_sentinel() {
        let mut sampler = SystemSampler::new("app");
        let snapshot = sampler.sample().unwrap();
        assert!(
            snapshot.host_ip.parse::<std::net::IpAddr>().is_ok(),
            "host_ip should be an address, got {}",
            snapshot.host_ip
        );
    }

    #[test]
    fn repeated_samples_are_stable() {
        let mut sampler = SystemSampler::new("app");
        for _ in 0..3 {
            let snapshot = sampler.sample().unwrap();
            assert!(snapshot.ram_usage_percent > 0.0);
        }
    }
}
