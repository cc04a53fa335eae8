//! Pure helpers behind the documentation site's interactive pieces.
//!
//! The docs pages embed a search box and a scroll-tracking sidebar; the
//! decision logic for both lives here so it can be tested without a DOM.

pub mod preview;
pub mod sidebar;

pub use preview::excerpt;
pub use sidebar::{DEFAULT_THRESHOLD, Viewport, active_anchor};
