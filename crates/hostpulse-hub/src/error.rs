//! Hub and listener error types.

use thiserror::Error;

/// Why a write to one client failed.
///
/// Any of these removes that client from the registry; none of them affects
/// delivery to other clients.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Peer closed the connection")]
    Closed,

    #[error("Write deadline exceeded")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Listener failures. Only binding is fatal to the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind listener: {0}")]
    Bind(std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
