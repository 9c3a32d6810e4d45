//! Contract between the broadcast hub and the metrics backend.

use crate::error::SampleError;
use crate::snapshot::MetricsSnapshot;

/// Synchronous source of host metrics.
///
/// Called once per tick from the hub's control loop, so implementations are
/// expected to return quickly relative to the tick interval. A failed call
/// skips that tick entirely; the next timer fire is the retry.
pub trait MetricsProvider: Send {
    /// Query the live host and build a fresh snapshot.
    fn sample(&mut self) -> Result<MetricsSnapshot, SampleError>;
}
