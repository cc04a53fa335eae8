//! Client side: the console's connection to the relay.
//!
//! The REPL widget itself (rendering, prompts, history) lives outside this
//! crate; it consumes [`ConsoleEvent`]s and hands buffers to
//! [`ConsoleBridge`].

pub mod console;
pub mod events;

pub use console::{ConsoleBridge, NO_CONNECTION_NOTICE};
pub use events::ConsoleEvent;
