//! Type-safe client connection identity.
//!
//! [`ClientId`] is a newtype wrapper around the peer's [`SocketAddr`].
//! Clients are keyed by where they connected from; there is no separate
//! identifier handshake.

use std::fmt;
use std::net::SocketAddr;

/// Identity of a console client connection, derived from its peer address.
///
/// Used as the dictionary key in the connection registry. A reconnecting
/// client gets a fresh identity unless the OS happens to reuse its
/// ephemeral port, in which case registration upserts over the stale entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(SocketAddr);

impl ClientId {
    /// Creates an identity from a peer address.
    #[must_use]
    pub const fn new(peer: SocketAddr) -> Self {
        Self(peer)
    }

    /// Returns the underlying peer address.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SocketAddr> for ClientId {
    fn from(peer: SocketAddr) -> Self {
        Self(peer)
    }
}
