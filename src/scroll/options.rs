//! Viewport band configuration for active-heading tracking.

/// The horizontal band of the viewport in which a heading counts as "in focus".
///
/// The band excludes a fixed number of pixels at the top of the viewport and
/// a fraction of its height at the bottom. The defaults (120px top, 60%
/// bottom) leave a strip in the upper-middle of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    /// Pixels excluded at the top of the viewport
    pub top_inset: f64,

    /// Fraction of the viewport height excluded at the bottom (0.0 - 1.0)
    pub bottom_inset_fraction: f64,
}

impl ViewportBand {
    /// Create a band with the default insets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top inset in pixels.
    pub fn with_top_inset(mut self, pixels: f64) -> Self {
        self.top_inset = pixels.max(0.0);
        self
    }

    /// Set the bottom inset as a fraction of viewport height.
    pub fn with_bottom_inset_fraction(mut self, fraction: f64) -> Self {
        self.bottom_inset_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Band edges relative to the viewport top, as `(top, bottom)`.
    ///
    /// On short viewports `bottom` can be above `top`; such a band is empty.
    pub fn edges(&self, viewport_height: f64) -> (f64, f64) {
        (
            self.top_inset,
            viewport_height * (1.0 - self.bottom_inset_fraction),
        )
    }

    /// Whether a viewport-relative vertical extent touches the band.
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let (band_top, band_bottom) = self.edges(viewport_height);
        band_bottom > band_top && top <= band_bottom && bottom >= band_top
    }
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_inset: 120.0,
            bottom_inset_fraction: 0.6,
        }
    }
}
