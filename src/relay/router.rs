//! The relay service: per-message classification and routing.
//!
//! [`Relay`] owns the [`ConnectionRegistry`] behind a single mutex and is
//! injected into every connection task. Holding one lock across each
//! routed message keeps registry mutation strictly one-message-at-a-time,
//! the same discipline a single-threaded event loop would give. Fan-out
//! stays non-blocking (sends are queue pushes, never socket I/O), so the
//! lock is never held for unbounded time.

use tokio::sync::Mutex;

use crate::protocol::{Message, MessageType, Source};

use super::connection::ConnectionHandle;
use super::identity::ClientId;
use super::registry::ConnectionRegistry;

/// Substitute `print` payload broadcast when a console submits work while
/// no host connection is open.
pub const NO_HOST_NOTICE: &str = "[no remote connection]";

/// Routes every inbound frame according to its declared source.
///
/// Constructed once at server start and shared by all connection tasks.
#[derive(Debug, Default)]
pub struct Relay {
    registry: Mutex<ConnectionRegistry>,
}

impl Relay {
    /// Creates a relay with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one inbound text frame from the connection `conn`.
    ///
    /// State machine per frame:
    /// 1. Parse; malformed frames are dropped with a log line, never fatal.
    /// 2. `host`-sourced: claim the host slot; non-ping frames are
    ///    broadcast verbatim to every open client.
    /// 3. `console`-sourced: upsert the client registration; non-ping
    ///    frames are forwarded verbatim to the host. With no open host
    ///    they are answered by a synthesized [`NO_HOST_NOTICE`] print
    ///    broadcast to all clients instead.
    /// 4. Anything else is dropped.
    ///
    /// `ping` frames only perform the bookkeeping in steps 2/3; they never
    /// propagate.
    pub async fn route(&self, id: ClientId, conn: &ConnectionHandle, raw: &str) {
        let msg = match Message::from_json(raw) {
            Ok(msg) => msg,
            Err(err) => {
                tracing::warn!(peer = %id, error = %err, "dropping malformed frame");
                return;
            }
        };

        // Operational log of everything that parsed; diagnosis only.
        tracing::info!(peer = %id, frame = raw, "received");

        let mut registry = self.registry.lock().await;
        match msg.source {
            Source::Host => {
                registry.set_host(conn.clone());
                if msg.mtype != MessageType::Ping {
                    registry.for_each_open_client(|client| {
                        client.send(raw);
                    });
                }
            }
            Source::Console => {
                registry.register_client(id, conn.clone());
                if msg.mtype != MessageType::Ping {
                    if registry.host_is_open() {
                        if let Some(host) = registry.host() {
                            host.send(raw);
                        }
                    } else {
                        let notice = Message::print(Source::Server, NO_HOST_NOTICE).to_json();
                        registry.for_each_open_client(|client| {
                            client.send(&notice);
                        });
                    }
                }
            }
            Source::Server => {
                tracing::debug!(peer = %id, "dropping frame with reserved server source");
            }
        }
    }

    /// Returns `true` iff a host connection is set and open.
    pub async fn host_is_open(&self) -> bool {
        self.registry.lock().await.host_is_open()
    }

    /// Number of registered client entries (stale ones included until the
    /// next fan-out prunes them).
    pub async fn client_count(&self) -> usize {
        self.registry.lock().await.client_count()
    }
}
