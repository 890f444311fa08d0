//! Display window selection for series lists.
//!
//! A series list never shows the whole series: only the current post and up
//! to [`WINDOW_RADIUS`] neighbours on each side, clamped at both ends.

use std::ops::RangeInclusive;

use tracing::debug;

/// Entries shown on each side of the current post.
pub const WINDOW_RADIUS: usize = 2;

/// Inclusive index range of a series list to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    /// First displayed index.
    pub start: usize,
    /// Last displayed index (inclusive).
    pub end: usize,
}

impl DisplayWindow {
    /// Number of entries in the window.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a window holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 1-based series position of the first entry, used as the list's
    /// `start` attribute.
    pub fn start_number(&self) -> usize {
        self.start + 1
    }

    /// Indices covered by the window.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Choose the window around `current_index` in a series of `len` posts.
///
/// Returns `None` when the series has fewer than two posts. A missing
/// `current_index` (post filtered out of the list) anchors the window at the
/// start of the series. An index past the end is clamped to the last post.
pub fn build_window(len: usize, current_index: Option<usize>) -> Option<DisplayWindow> {
    if len <= 1 {
        return None;
    }

    let last = len - 1;
    let anchor = match current_index {
        Some(index) => index.min(last),
        None => {
            debug!(len, "current post not in series list, anchoring window at start");
            0
        }
    };

    let window = DisplayWindow {
        start: anchor.saturating_sub(WINDOW_RADIUS),
        end: (anchor + WINDOW_RADIUS).min(last),
    };
    debug!(len, anchor, start = window.start, end = window.end, "series window");
    Some(window)
}
