//! Connection registry: one host slot, many client connections.
//!
//! [`ConnectionRegistry`] owns every identity → connection mapping in the
//! process; no other component holds a connection long-term. It is plain
//! mutable state with no interior locking — the [`super::router::Relay`]
//! serializes all access behind a single mutex, mirroring the one-message-
//! at-a-time event loop this protocol assumes.

use std::collections::HashMap;

use super::connection::ConnectionHandle;
use super::identity::ClientId;

/// Tracks the single active host connection and the set of client
/// connections.
///
/// The host slot is last-writer-wins: a new host-sourced message always
/// claims it, even while the previous host connection is still open — the
/// old handle is simply dropped, never closed by the registry. Dead client
/// entries are discovered and removed lazily in
/// [`ConnectionRegistry::for_each_open_client`]; there is no background
/// sweep.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    host: Option<ConnectionHandle>,
    clients: HashMap<ClientId, ConnectionHandle>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally installs `handle` as the host connection.
    pub fn set_host(&mut self, handle: ConnectionHandle) {
        self.host = Some(handle);
    }

    /// Returns the current host connection, open or not.
    #[must_use]
    pub fn host(&self) -> Option<&ConnectionHandle> {
        self.host.as_ref()
    }

    /// Returns `true` iff a host is set and its connection is still open.
    #[must_use]
    pub fn host_is_open(&self) -> bool {
        self.host.as_ref().is_some_and(ConnectionHandle::is_open)
    }

    /// Upserts a client connection under its identity.
    ///
    /// Re-registering the same identity replaces the stored handle and
    /// never duplicates the entry.
    pub fn register_client(&mut self, id: ClientId, handle: ConnectionHandle) {
        self.clients.insert(id, handle);
    }

    /// Invokes `f` on every open client connection, pruning dead ones.
    ///
    /// Dead entries are collected during the scan and removed afterwards,
    /// so the map is never mutated mid-iteration. This is the only place
    /// connections are removed: pruning happens when a fan-out touches a
    /// dead entry, not on any timer.
    pub fn for_each_open_client(&mut self, mut f: impl FnMut(&ConnectionHandle)) {
        let mut dead: Vec<ClientId> = Vec::new();
        for (id, handle) in &self.clients {
            if handle.is_open() {
                f(handle);
            } else {
                dead.push(*id);
            }
        }
        for id in dead {
            tracing::debug!(client = %id, "pruning closed client connection");
            self.clients.remove(&id);
        }
    }

    /// Number of registered client entries, stale ones included.
    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}
