//! Error types for hostpulse-core.

use thiserror::Error;

/// Sampling failures surfaced by a metrics provider.
///
/// A failed sample skips the tick it was taken for; the next timer fire is
/// the retry.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("CPU statistics unavailable")]
    CpuUnavailable,

    #[error("Memory statistics unavailable")]
    MemoryUnavailable,

    #[error("Platform query failed: {0}")]
    Platform(String),
}
