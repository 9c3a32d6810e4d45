//! Structured logging and Prometheus metrics for hostpulse.
//!
//! - Structured logging with tracing (JSON in production, pretty otherwise)
//! - Prometheus gauges and counters for the broadcast hub

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
