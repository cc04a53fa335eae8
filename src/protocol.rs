//! Wire protocol: message envelope and codec helpers.
//!
//! One JSON object per WebSocket text frame:
//!
//! ```json
//! { "source": "console", "mtype": "eval", "code": "print(1+1)" }
//! ```
//!
//! There is no version field and no negotiation beyond the initial `ping`;
//! schema changes are breaking by design. Parsing tolerates unknown extra
//! fields, and the relay forwards frames verbatim, so peers may carry
//! additional data without the relay ever touching it.

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Which side of the system produced a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The single authoritative remote execution endpoint.
    Host,
    /// A browser-side console participant.
    Console,
    /// The relay itself (synthesized notices only).
    Server,
}

/// Message type discriminator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Console → Host: code to execute.
    Eval,
    /// Host/Server → Console: a line of output.
    Print,
    /// Host → Console: a line of output tagged with a topic.
    Log,
    /// Liveness/role announcement; never routed onward.
    Ping,
}

/// A single protocol message.
///
/// Immutable once constructed; the relay never merges, batches, or rewrites
/// messages. Which optional field is present depends on [`MessageType`]:
/// `code` for `eval`, `message` for `print` and `log`, `topic` for `log`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Declared origin, used by the relay to classify the connection.
    pub source: Source,
    /// Message type discriminator.
    pub mtype: MessageType,
    /// Code to evaluate (`eval` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Output text (`print` and `log`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Log topic (`log` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Message {
    /// Builds a `ping` announcing the given role.
    #[must_use]
    pub const fn ping(source: Source) -> Self {
        Self {
            source,
            mtype: MessageType::Ping,
            code: None,
            message: None,
            topic: None,
        }
    }

    /// Builds a console-sourced `eval` carrying code for the host.
    #[must_use]
    pub fn eval(code: impl Into<String>) -> Self {
        Self {
            source: Source::Console,
            mtype: MessageType::Eval,
            code: Some(code.into()),
            message: None,
            topic: None,
        }
    }

    /// Builds a `print` line from the given source.
    #[must_use]
    pub fn print(source: Source, message: impl Into<String>) -> Self {
        Self {
            source,
            mtype: MessageType::Print,
            code: None,
            message: Some(message.into()),
            topic: None,
        }
    }

    /// Builds a host-sourced `log` line tagged with a topic.
    #[must_use]
    pub fn log(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: Source::Host,
            mtype: MessageType::Log,
            code: None,
            message: Some(message.into()),
            topic: Some(topic.into()),
        }
    }

    /// Parses a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Malformed`] when the frame is not valid JSON
    /// or uses an unknown `source`/`mtype` value.
    pub fn from_json(raw: &str) -> Result<Self, ConsoleError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes to a text frame.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
