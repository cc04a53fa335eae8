//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

use crate::error::ConsoleError;

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8087`).
    pub listen_addr: SocketAddr,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the default bind address when `LISTEN_ADDR` is not
    /// set. Calls `dotenvy::dotenv().ok()` to optionally load a `.env`
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConsoleError> {
        dotenvy::dotenv().ok();

        let raw = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8087".to_string());
        let listen_addr: SocketAddr = raw
            .parse()
            .map_err(|_| ConsoleError::Config(format!("invalid LISTEN_ADDR: {raw}")))?;

        Ok(Self { listen_addr })
    }
}
