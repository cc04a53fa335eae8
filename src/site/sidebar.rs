//! Sidebar active-section tracking.
//!
//! The documentation sidebar highlights the heading closest to the top of
//! the viewport while the reader scrolls. [`active_anchor`] is the pure
//! selection rule: given the headings' vertical offsets and the current
//! scroll geometry it picks the index to highlight, so the DOM layer only
//! has to measure and apply a class.

/// Scroll geometry of the page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance scrolled from the top of the document.
    pub scroll_top: f64,
    /// Height of the visible area.
    pub height: f64,
    /// Total height of the scrollable document.
    pub content_height: f64,
}

/// How far above the viewport top a heading may sit and still count as
/// the current section.
pub const DEFAULT_THRESHOLD: f64 = 300.0;

/// Picks the heading to highlight for the current scroll position.
///
/// `offsets` is each heading's distance from the document top, in
/// document order. Near the very top the first heading is always active,
/// and once the viewport bottom reaches the end of the document the last
/// one is, so short trailing sections can still be selected. In between,
/// the active heading is the last one whose offset lies within
/// `threshold` pixels below the viewport top (or anywhere above it).
///
/// Returns `None` only when `offsets` is empty.
#[must_use]
pub fn active_anchor(offsets: &[f64], viewport: Viewport, threshold: f64) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }
    if viewport.scroll_top < threshold {
        return Some(0);
    }
    if viewport.scroll_top + viewport.height >= viewport.content_height {
        return Some(offsets.len() - 1);
    }

    let mut active = 0;
    for (i, offset) in offsets.iter().enumerate() {
        if viewport.scroll_top < offset - threshold {
            break;
        }
        active = i;
    }
    Some(active)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn viewport(scroll_top: f64) -> Viewport {
        Viewport {
            scroll_top,
            height: 400.0,
            content_height: 3000.0,
        }
    }

    #[test]
    fn no_headings_means_no_selection() {
        assert_eq!(active_anchor(&[], viewport(500.0), DEFAULT_THRESHOLD), None);
    }

    #[test]
    fn near_the_top_the_first_heading_wins() {
        let offsets = [0.0, 500.0, 1000.0];
        assert_eq!(
            active_anchor(&offsets, viewport(299.0), DEFAULT_THRESHOLD),
            Some(0)
        );
    }

    #[test]
    fn at_the_bottom_the_last_heading_wins() {
        let offsets = [0.0, 500.0, 2900.0];
        let vp = Viewport {
            scroll_top: 2600.0,
            height: 400.0,
            content_height: 3000.0,
        };
        // 2900.0 is nowhere near the viewport top, but the page cannot
        // scroll any further.
        assert_eq!(active_anchor(&offsets, vp, DEFAULT_THRESHOLD), Some(2));
    }

    #[test]
    fn mid_scroll_picks_the_closest_heading_above_the_threshold_line() {
        let offsets = [0.0, 500.0, 1000.0, 1500.0];
        // 1000.0 sits 200 px below the viewport top: inside the threshold,
        // so it already counts as entered. 1500.0 does not.
        assert_eq!(
            active_anchor(&offsets, viewport(800.0), DEFAULT_THRESHOLD),
            Some(2)
        );
    }

    #[test]
    fn heading_exactly_on_the_threshold_line_is_active() {
        let offsets = [0.0, 600.0];
        assert_eq!(
            active_anchor(&offsets, viewport(300.0), DEFAULT_THRESHOLD),
            Some(1)
        );
    }

    #[test]
    fn heading_just_past_the_threshold_line_is_not_yet_active() {
        let offsets = [0.0, 601.0];
        assert_eq!(
            active_anchor(&offsets, viewport(300.0), DEFAULT_THRESHOLD),
            Some(0)
        );
    }
}
