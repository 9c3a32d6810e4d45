//! sysinfo-backed metrics provider for hostpulse.
//!
//! `SystemSampler` implements the `MetricsProvider` contract by querying the
//! live host through a reusable `sysinfo::System`: global CPU utilization,
//! memory utilization, Unix load averages, and the local non-loopback IP.

mod system;

pub use system::SystemSampler;
