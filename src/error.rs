//! Central error type for the relay and the console bridge.
//!
//! [`ConsoleError`] covers the failures that are allowed to surface at all.
//! Per-message failures (malformed frames, dead peers) are logged and
//! dropped where they occur and never abort a connection or the process.

use tokio_tungstenite::tungstenite;

/// Errors surfaced by the relay server and the console bridge.
///
/// Protocol errors are non-fatal by design: the relay drops the offending
/// frame and keeps the connection, the bridge drops the frame and keeps
/// listening. Transport and configuration errors are only returned from
/// explicit entry points (`connect`, `from_env`).
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A wire payload could not be parsed as a protocol message.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// WebSocket transport failure while connecting or sending.
    #[error("transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    /// A configuration value could not be parsed at startup.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn malformed_wraps_serde_error() {
        let Err(parse_err) = serde_json::from_str::<serde_json::Value>("{nope") else {
            panic!("expected parse failure");
        };
        let err = ConsoleError::from(parse_err);
        assert!(err.to_string().starts_with("malformed message:"));
    }

    #[test]
    fn config_message_is_readable() {
        let err = ConsoleError::Config("LISTEN_ADDR: not a socket address".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: LISTEN_ADDR: not a socket address"
        );
    }
}
