//! Reading progress from page scroll geometry.

use serde::{Deserialize, Serialize};

/// Page scroll geometry reported by the host on each scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the page
    pub scroll_top: f64,

    /// Total height of the scrollable document
    pub document_height: f64,

    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Create new scroll metrics.
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Total distance the reader can scroll.
    pub fn scrollable_distance(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Fraction of the scrollable distance traversed, clamped to `[0, 1]`.
///
/// A page that doesn't scroll (document no taller than the viewport) reports
/// 0. Overscroll in either direction is clamped.
pub fn reading_progress(metrics: &ScrollMetrics) -> f64 {
    let distance = metrics.scrollable_distance();
    if distance.is_nan() || distance <= 0.0 {
        return 0.0;
    }

    let progress = metrics.scroll_top / distance;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
