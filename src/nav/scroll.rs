//! Scroll state: raw offset, progress percentage and the "scrolled" flag

use crate::map_range_clamped;

/// One reading of the host's scroll geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Vertical scroll offset (px)
    pub offset: f64,
    /// Full document height (px)
    pub scroll_height: f64,
    /// Viewport height (px)
    pub client_height: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            client_height,
        }
    }

    /// Offset with overscroll and garbage readings folded to >= 0
    pub fn clamped_offset(&self) -> f64 {
        if self.offset.is_finite() {
            self.offset.max(0.0)
        } else {
            0.0
        }
    }

    /// Total distance the page can scroll
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Percentage of the scrollable distance covered, always within [0, 100]
///
/// Content shorter than the viewport (`scrollable <= 0`) reports 0.
#[inline]
pub fn scroll_percentage(offset: f64, scrollable: f64) -> f64 {
    if !(scrollable > 0.0) || !scrollable.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Page-wide scroll state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f64,
    pub percentage: f64,
    pub past_threshold: bool,
}

impl ScrollState {
    /// Recompute from a fresh sample
    pub fn update(&mut self, sample: &ScrollSample, threshold: f64) {
        self.offset = sample.clamped_offset();
        self.percentage = scroll_percentage(self.offset, sample.scrollable());
        self.past_threshold = self.offset > threshold;
    }
}

/// Hero card parallax derived from the scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Downward translation (px)
    pub translate_y: f64,
    pub opacity: f64,
}

/// Hero drifts down 150px over the first 500px and fades out over the first 300px
pub fn hero_parallax(offset: f64) -> Parallax {
    Parallax {
        translate_y: map_range_clamped(offset, (0.0, 500.0), (0.0, 150.0)),
        opacity: map_range_clamped(offset, (0.0, 300.0), (1.0, 0.0)),
    }
}
