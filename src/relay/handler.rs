//! Axum handlers: WebSocket upgrade and health.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use super::connection::run_connection;
use super::identity::ClientId;
use crate::app_state::AppState;

/// `GET /` — upgrade to WebSocket.
///
/// The relay's endpoint is path-less: hosts and consoles alike connect to
/// the root and declare their role with their first message.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let relay = Arc::clone(&state.relay);
    ws.on_upgrade(move |socket| run_connection(socket, ClientId::new(peer), relay))
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    host_connected: bool,
    clients: usize,
}

/// `GET /health` — service status and connection counts.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host_connected: state.relay.host_is_open().await,
            clients: state.relay.client_count().await,
        }),
    )
}

/// All relay routes: the WebSocket endpoint at `/` plus `/health`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ws_handler))
        .route("/health", get(health_handler))
}
