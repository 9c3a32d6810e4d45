//! Client identity and the transport write-half seam.

use std::fmt;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::SplitSink;
use futures_util::SinkExt;

use crate::error::SinkError;

/// Identifier for one registered client. Allocated monotonically and never
/// reused within a process, so a removed client can never be confused with
/// a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub(crate) u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client-{}", self.0)
    }
}

/// Write half of one subscriber connection.
///
/// The hub is the only writer and the only closer; the session keeps the
/// read half. Implementations surface a failed or gone peer as an error
/// rather than blocking.
#[async_trait]
pub trait ClientSink: Send {
    /// Send one text frame.
    async fn send(&mut self, text: &str) -> Result<(), SinkError>;

    /// Close the underlying transport. Failures are ignored; the connection
    /// is gone either way.
    async fn close(&mut self);
}

/// [`ClientSink`] over the write half of an accepted WebSocket.
pub struct WsSink {
    sink: SplitSink<WebSocket, Message>,
}

impl WsSink {
    pub fn new(sink: SplitSink<WebSocket, Message>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl ClientSink for WsSink {
    async fn send(&mut self, text: &str) -> Result<(), SinkError> {
        self.sink
            .send(Message::Text(text.to_owned().into()))
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))
    }

    async fn close(&mut self) {
        let _ = self.sink.send(Message::Close(None)).await;
        let _ = self.sink.close().await;
    }
}

/// A subscriber as the hub tracks it: identity, peer address for logging,
/// and the write half.
pub struct RegisteredClient {
    pub id: ClientId,
    pub remote_addr: Option<SocketAddr>,
    pub sink: Box<dyn ClientSink>,
}
