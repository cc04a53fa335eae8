//! Events the bridge surfaces to the REPL widget.

/// A line for the console surface.
///
/// The REPL widget consumes these off the bridge's event channel; they are
/// the client-side rendition of inbound `print`/`log` messages plus the
/// bridge's own connection notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Plain output line: host results, relay fallbacks, bridge notices.
    Print {
        /// Text to render.
        message: String,
    },
    /// Output line tagged with a topic so the widget can style it.
    Log {
        /// Topic tag (e.g. `"warn"`, `"gfx"`).
        topic: String,
        /// Text to render.
        message: String,
    },
}

impl ConsoleEvent {
    /// Builds a plain output line.
    #[must_use]
    pub fn print(message: impl Into<String>) -> Self {
        Self::Print {
            message: message.into(),
        }
    }

    /// Builds a topic-tagged output line.
    #[must_use]
    pub fn log(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Log {
            topic: topic.into(),
            message: message.into(),
        }
    }
}
