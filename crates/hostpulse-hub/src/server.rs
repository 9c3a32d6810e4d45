//! WebSocket listener and per-connection sessions.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{ConnectInfo, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use futures_util::stream::StreamExt;
use prometheus::{Encoder, TextEncoder};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::client::WsSink;
use crate::config::HubConfig;
use crate::error::{Result, ServerError};
use crate::hub::HubHandle;

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    hub: HubHandle,
}

/// Create the axum router.
pub fn create_router(hub: HubHandle) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .with_state(AppState { hub })
}

/// WebSocket upgrade handler. A connection that fails the handshake is
/// rejected by axum here and never reaches the hub.
async fn ws_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_session(socket, addr, state.hub))
}

/// One session per accepted connection: register the write half with the
/// hub, then read until the peer goes away.
///
/// Inbound application frames are permitted but carry no meaning; the read
/// loop exists to detect closure, including half-open peers that would
/// otherwise never fail a write. Loop termination always unregisters, which
/// is a no-op if the hub already dropped this client on a send failure.
async fn run_session(socket: WebSocket, addr: SocketAddr, hub: HubHandle) {
    let (sink, mut stream) = socket.split();
    let id = hub.register(Box::new(WsSink::new(sink)), Some(addr)).await;

    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Close(_)) => {
                debug!(id = %id, "Client sent close frame");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                debug!(id = %id, error = %e, "Read failed");
                break;
            }
        }
    }

    hub.unregister(id).await;
}

/// Liveness probe.
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Prometheus text exposition.
async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        debug!(error = %e, "Metrics encoding failed");
    }
    ([(header::CONTENT_TYPE, encoder.format_type().to_string())], buf).into_response()
}

/// Bind and serve until the process exits.
///
/// Binding is the only fatal failure in this crate; everything after it is
/// recovered per-connection.
pub async fn run_server(hub: HubHandle, config: &HubConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    info!(port = config.port, "Monitoring endpoint listening");

    let app = create_router(hub);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
