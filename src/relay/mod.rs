//! Relay server: connection lifecycle, registry, and message routing.
//!
//! The relay multiplexes exactly one host connection (the remote scripting
//! runtime) with any number of console clients. Roles are not negotiated
//! up front: every connection arrives anonymous and is classified by the
//! `source` of each message it sends.

pub mod connection;
pub mod handler;
pub mod identity;
pub mod registry;
pub mod router;

pub use connection::ConnectionHandle;
pub use identity::ClientId;
pub use registry::ConnectionRegistry;
pub use router::{NO_HOST_NOTICE, Relay};
