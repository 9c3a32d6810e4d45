//! Core domain types for the hostpulse metrics broadcaster.
//!
//! This crate provides the types shared by the sampling backend and the
//! broadcast hub:
//! - `MetricsSnapshot`: one tick's sampled host metrics and its wire shape
//! - `ControlEvent`: server-to-client control messages
//! - `MetricsProvider`: contract between the hub and the sampling backend

pub mod error;
pub mod event;
pub mod provider;
pub mod snapshot;

pub use error::SampleError;
pub use event::ControlEvent;
pub use provider::MetricsProvider;
pub use snapshot::MetricsSnapshot;
