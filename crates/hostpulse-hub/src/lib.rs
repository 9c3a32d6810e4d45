//! hostpulse-hub - client registry and broadcast hub.
//!
//! The hub is a single control loop that owns the set of connected clients
//! and the sampling ticker. Registration, unregistration and broadcast
//! passes are serialized through one mpsc consumer, so the registry is
//! never observed mid-mutation and no locking is needed.
//!
//! ```text
//! listener ──register──▶ ┌─────────────┐ ◀──tick── interval timer
//!                        │   HubTask   │
//! session ──unregister─▶ │ (registry)  │ ──send──▶ every ClientSink
//!                        └─────────────┘
//! ```
//!
//! Each accepted WebSocket is split: the write half goes into the registry
//! as a [`ClientSink`], the read half stays with a per-connection session
//! whose only job is to detect that the peer went away and request
//! unregistration.

mod client;
mod config;
mod error;
mod hub;
mod server;

pub use client::{ClientId, ClientSink, RegisteredClient, WsSink};
pub use config::HubConfig;
pub use error::{ServerError, SinkError};
pub use hub::{HubCommand, HubHandle, HubTask};
pub use server::{create_router, run_server};
