//! Per-socket connection state and read/write loop.
//!
//! Each accepted WebSocket runs [`run_connection`]: a single
//! `tokio::select!` loop over inbound frames and this connection's
//! outbound queue. The queue's sending half is wrapped in
//! [`ConnectionHandle`] and handed to the registry, so routing code can
//! push frames at any peer without ever touching its socket directly.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use super::identity::ClientId;
use super::router::Relay;

/// Cheap, cloneable sending half of a connection.
///
/// Liveness is observed, never cached: [`ConnectionHandle::is_open`] asks
/// the channel at call time, and it reports closed exactly when the
/// connection's socket loop has exited and dropped the receiving half.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl ConnectionHandle {
    /// Wraps the sending half of a connection's outbound queue.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Queues a text frame for delivery, fire-and-forget.
    ///
    /// Never blocks: the queue is unbounded, so a slow peer only grows its
    /// own queue. Returns `false` if the connection is already gone.
    pub fn send(&self, frame: &str) -> bool {
        self.tx.send(frame.to_string()).is_ok()
    }

    /// Returns `true` while the connection's socket loop is still running.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Runs the read/write loop for one accepted socket.
///
/// Inbound text frames go to [`Relay::route`]; frames queued on the
/// outbound channel are written to the socket. Exiting the loop drops the
/// outbound receiver, which is what makes every registered clone of this
/// connection's handle observable as closed.
pub async fn run_connection(socket: WebSocket, id: ClientId, relay: Arc<Relay>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();
    let handle = ConnectionHandle::new(out_tx);

    loop {
        tokio::select! {
            // Inbound frame from the peer
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        relay.route(id, &handle, &text).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(peer = %id, error = %err, "socket error");
                        break;
                    }
                    // Binary and control frames are not part of the protocol.
                    _ => {}
                }
            }
            // Frame routed to this peer
            queued = out_rx.recv() => {
                match queued {
                    Some(frame) => {
                        if ws_tx.send(Message::text(frame)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    tracing::debug!(peer = %id, "connection closed");
}
