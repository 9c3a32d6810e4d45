//! Prometheus metrics for the broadcast hub.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration fails,
//! it indicates a fatal configuration error (e.g., duplicate metric names)
//! that should crash at startup rather than fail silently. These panics only
//! occur during static initialization, never at runtime.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_gauge, IntCounter, IntGauge};

/// Number of currently registered clients.
pub static CLIENTS_CONNECTED: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "hostpulse_clients_connected",
        "Number of currently registered WebSocket clients"
    )
    .unwrap()
});

/// Total broadcast passes completed (one per successful sampling tick).
pub static BROADCASTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "hostpulse_broadcasts_total",
        "Total snapshot broadcast passes"
    )
    .unwrap()
});

/// Total client writes that failed or exceeded the write deadline.
pub static SEND_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "hostpulse_send_failures_total",
        "Total failed client writes, each of which unregisters that client"
    )
    .unwrap()
});

/// Total sampling calls that failed, skipping the tick.
pub static SAMPLE_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "hostpulse_sample_failures_total",
        "Total failed sampling calls (the tick is skipped)"
    )
    .unwrap()
});
