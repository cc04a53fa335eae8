//! # console-relay
//!
//! WebSocket relay between one embedded scripting runtime ("host") and
//! any number of browser debug consoles, plus the pure logic behind the
//! console front end: input-completeness analysis, prefix completion,
//! and the documentation site's interactive helpers.
//!
//! The relay itself does no evaluation. It accepts every connection on a
//! single endpoint, learns each peer's role from the frames it sends,
//! and forwards frames verbatim: console input goes to the host, host
//! output fans out to every console.
//!
//! ## Architecture
//!
//! ```text
//! Browser consoles (WS)          Host runtime (WS)
//!     │                              │
//!     ├── WS Handler (relay/)        │
//!     │                              │
//!     ├── Relay router ──────────────┤
//!     │     one host slot,           │
//!     │     N console handles        │
//!     │
//!     ├── Statement analyzer (analyzer/)
//!     └── Docs-site helpers (site/)
//! ```
//!
//! [`bridge::ConsoleBridge`] is the client half: it dials the relay,
//! ships complete statements, and surfaces host output as events.

pub mod analyzer;
pub mod app_state;
pub mod bridge;
pub mod config;
pub mod error;
pub mod protocol;
pub mod relay;
pub mod site;
