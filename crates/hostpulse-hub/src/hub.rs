//! The broadcast hub: one control loop owning the client registry.
//!
//! All registry mutation flows through a single mpsc consumer. Sessions and
//! the listener talk to the hub exclusively through [`HubHandle`]; nothing
//! else ever touches the client set, which is what makes lock-free
//! broadcasting safe.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, timeout, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use hostpulse_core::{ControlEvent, MetricsProvider};
use hostpulse_telemetry::metrics;

use crate::client::{ClientId, ClientSink, RegisteredClient};
use crate::config::HubConfig;
use crate::error::SinkError;

/// Command channel capacity. Senders await when the loop falls behind, so
/// bursts of registrations are queued, never lost.
const COMMAND_BUFFER: usize = 64;

/// Messages consumed by the hub's control loop.
pub enum HubCommand {
    /// Add a connection to the registry.
    Register(RegisteredClient),
    /// Remove a connection and close its transport. Idempotent.
    Unregister(ClientId),
    /// Close every client and stop the loop.
    Shutdown,
}

/// Handle for talking to the hub.
///
/// Cheap to clone; also owns the id allocator so sessions learn their id
/// without a round-trip through the actor.
#[derive(Clone)]
pub struct HubHandle {
    tx: mpsc::Sender<HubCommand>,
    next_id: Arc<AtomicU64>,
}

impl HubHandle {
    /// Register a connection's write half.
    ///
    /// Returns the id the session must use to unregister once its read loop
    /// ends.
    pub async fn register(
        &self,
        sink: Box<dyn ClientSink>,
        remote_addr: Option<SocketAddr>,
    ) -> ClientId {
        let id = ClientId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let client = RegisteredClient {
            id,
            remote_addr,
            sink,
        };
        let _ = self.tx.send(HubCommand::Register(client)).await;
        id
    }

    /// Request removal of a client. A no-op if it is already gone.
    pub async fn unregister(&self, id: ClientId) {
        let _ = self.tx.send(HubCommand::Unregister(id)).await;
    }

    /// Stop the hub, closing every client connection.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(HubCommand::Shutdown).await;
    }
}

/// The hub actor.
///
/// Owns the registry, the sampling provider and the tick timer; runs until
/// [`HubCommand::Shutdown`] arrives or every handle is dropped.
pub struct HubTask {
    rx: mpsc::Receiver<HubCommand>,
    provider: Box<dyn MetricsProvider>,
    clients: HashMap<ClientId, RegisteredClient>,
    interval: Duration,
    write_timeout: Duration,
}

impl HubTask {
    /// Create the hub actor and its handle.
    pub fn new(provider: Box<dyn MetricsProvider>, config: &HubConfig) -> (Self, HubHandle) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let task = Self {
            rx,
            provider,
            clients: HashMap::new(),
            interval: config.interval(),
            write_timeout: config.write_timeout(),
        };
        let handle = HubHandle {
            tx,
            next_id: Arc::new(AtomicU64::new(0)),
        };
        (task, handle)
    }

    /// Run the control loop.
    ///
    /// Commands and timer ticks are multiplexed through one `select!`, so a
    /// broadcast pass always sees the membership that existed when it
    /// started, and registrations arriving mid-pass are applied after it.
    pub async fn run(mut self) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!("Hub started");

        loop {
            tokio::select! {
                cmd = self.rx.recv() => match cmd {
                    Some(HubCommand::Register(client)) => self.on_register(client).await,
                    Some(HubCommand::Unregister(id)) => self.on_unregister(id).await,
                    Some(HubCommand::Shutdown) | None => break,
                },
                _ = ticker.tick() => self.on_tick().await,
            }
        }

        for (_, mut client) in self.clients.drain() {
            client.sink.close().await;
        }
        metrics::CLIENTS_CONNECTED.set(0);
        debug!("Hub stopped");
    }

    /// Add a client and send the connect acknowledgement.
    ///
    /// The ack is best-effort: on failure the client stays registered and is
    /// dropped at its first broadcast failure, or when its session ends.
    async fn on_register(&mut self, mut client: RegisteredClient) {
        match serde_json::to_string(&ControlEvent::ServerConnect) {
            Ok(ack) => {
                if let Err(e) = Self::send_to(&mut client, &ack, self.write_timeout).await {
                    debug!(id = %client.id, error = %e, "Connect ack failed");
                }
            }
            Err(e) => debug!(error = %e, "Failed to serialize connect event"),
        }

        info!(id = %client.id, remote_addr = ?client.remote_addr, "Client connected");
        self.clients.insert(client.id, client);
        metrics::CLIENTS_CONNECTED.set(self.clients.len() as i64);
    }

    /// Remove a client and close its transport. Unknown ids are ignored.
    async fn on_unregister(&mut self, id: ClientId) {
        let mut client = match self.clients.remove(&id) {
            Some(client) => client,
            None => return,
        };
        client.sink.close().await;
        info!(id = %id, remote_addr = ?client.remote_addr, "Client disconnected");
        metrics::CLIENTS_CONNECTED.set(self.clients.len() as i64);
    }

    /// Sample and fan the snapshot out to every registered client.
    ///
    /// A sampling failure skips the whole tick; no client sees a partial or
    /// stale snapshot. Send failures are collected during the pass and the
    /// failed clients unregistered after it, so the set is never mutated
    /// while it is being iterated.
    async fn on_tick(&mut self) {
        let snapshot = match self.provider.sample() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Sampling failed, skipping tick");
                metrics::SAMPLE_FAILURES_TOTAL.inc();
                return;
            }
        };

        let payload = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Snapshot serialization failed, skipping tick");
                return;
            }
        };

        metrics::BROADCASTS_TOTAL.inc();

        let deadline = self.write_timeout;
        let mut failed: Vec<ClientId> = Vec::new();
        for client in self.clients.values_mut() {
            if let Err(e) = Self::send_to(client, &payload, deadline).await {
                debug!(id = %client.id, error = %e, "Broadcast write failed");
                metrics::SEND_FAILURES_TOTAL.inc();
                failed.push(client.id);
            }
        }

        for id in failed {
            self.on_unregister(id).await;
        }
    }

    /// One deadline-bounded write. An expired deadline counts as a failed
    /// send; the hub never blocks on a stalled peer.
    async fn send_to(
        client: &mut RegisteredClient,
        text: &str,
        deadline: Duration,
    ) -> Result<(), SinkError> {
        match timeout(deadline, client.sink.send(text)).await {
            Ok(result) => result,
            Err(_) => Err(SinkError::Timeout),
        }
    }
}
