//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::relay::Relay;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay service owning the connection registry.
    pub relay: Arc<Relay>,
}
