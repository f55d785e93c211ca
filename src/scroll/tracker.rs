//! Visibility tracking for heading anchors.
//!
//! [`VisibilityTracker`] abstracts over "is this anchor currently within the
//! focus band". A browser host backs it with its native intersection
//! machinery; [`BandTracker`] is a portable implementation that derives
//! visibility from anchor offsets and scroll geometry.

use super::{ScrollMetrics, ViewportBand};

/// One anchor's visibility change within a notification batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityEntry {
    /// Anchor id
    pub id: String,

    /// Whether the anchor is now inside the band
    pub is_visible: bool,
}

impl VisibilityEntry {
    /// Create a new visibility entry.
    pub fn new(id: impl Into<String>, is_visible: bool) -> Self {
        Self {
            id: id.into(),
            is_visible,
        }
    }
}

/// Callback receiving one notification batch.
pub type BatchCallback = Box<dyn FnMut(&[VisibilityEntry])>;

/// Tracks whether registered anchors are within the viewport focus band.
pub trait VisibilityTracker {
    /// Host handle for an anchor element.
    type Element;

    /// Start tracking an anchor.
    fn register(&mut self, id: &str, element: Self::Element);

    /// Stop tracking an anchor.
    fn unregister(&mut self, id: &str);

    /// Install the callback that receives visibility batches.
    fn on_visibility_batch(&mut self, callback: BatchCallback);

    /// Drop the batch callback and every remaining registration.
    fn disconnect(&mut self);

    /// Scroll notification for trackers that compute visibility themselves.
    ///
    /// Native trackers that observe the viewport on their own can ignore it.
    fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        let _ = metrics;
    }
}

/// Vertical extent of an anchor in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorBox {
    /// Offset of the anchor's top edge from the document top
    pub top: f64,

    /// Rendered height of the anchor
    pub height: f64,
}

impl AnchorBox {
    /// Create a new anchor box.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    /// Offset of the anchor's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
struct TrackedAnchor {
    id: String,
    bounds: AnchorBox,
    /// Last reported state; `None` until first evaluated.
    visible: Option<bool>,
}

/// Portable tracker computing band membership from scroll geometry.
///
/// Each scroll evaluation emits one batch holding every anchor whose
/// in-band state changed, in registration order. A newly registered anchor
/// is always reported on its first evaluation.
pub struct BandTracker {
    band: ViewportBand,
    anchors: Vec<TrackedAnchor>,
    callback: Option<BatchCallback>,
}

impl BandTracker {
    /// Create a tracker for the given band.
    pub fn new(band: ViewportBand) -> Self {
        Self {
            band,
            anchors: Vec::new(),
            callback: None,
        }
    }

    /// The band this tracker evaluates against.
    pub fn band(&self) -> ViewportBand {
        self.band
    }

    /// Number of tracked anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Check if no anchors are tracked.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Check if an anchor id is tracked.
    pub fn is_registered(&self, id: &str) -> bool {
        self.anchors.iter().any(|a| a.id == id)
    }

    /// Check if a batch callback is installed.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Scroll position that brings an anchor to the top of the viewport.
    ///
    /// Used for table of contents navigation.
    pub fn anchor_offset(&self, id: &str) -> Option<f64> {
        self.anchors
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.bounds.top.max(0.0))
    }

    /// Recompute band membership and return the entries that changed.
    pub fn evaluate(&mut self, metrics: &ScrollMetrics) -> Vec<VisibilityEntry> {
        let band = self.band;
        let mut batch = Vec::new();

        for anchor in &mut self.anchors {
            let top = anchor.bounds.top - metrics.scroll_top;
            let bottom = anchor.bounds.bottom() - metrics.scroll_top;
            let visible = band.intersects(top, bottom, metrics.viewport_height);

            if anchor.visible != Some(visible) {
                anchor.visible = Some(visible);
                batch.push(VisibilityEntry::new(anchor.id.clone(), visible));
            }
        }

        batch
    }
}

impl Default for BandTracker {
    fn default() -> Self {
        Self::new(ViewportBand::default())
    }
}

impl VisibilityTracker for BandTracker {
    type Element = AnchorBox;

    fn register(&mut self, id: &str, element: AnchorBox) {
        // Duplicate heading text yields duplicate ids; like an id lookup in
        // a page, only the first anchor is observed.
        if self.is_registered(id) {
            log::warn!("Anchor '{}' is already tracked; ignoring duplicate", id);
            return;
        }
        self.anchors.push(TrackedAnchor {
            id: id.to_string(),
            bounds: element,
            visible: None,
        });
    }

    fn unregister(&mut self, id: &str) {
        self.anchors.retain(|a| a.id != id);
    }

    fn on_visibility_batch(&mut self, callback: BatchCallback) {
        self.callback = Some(callback);
    }

    fn disconnect(&mut self) {
        self.callback = None;
        self.anchors.clear();
    }

    fn on_scroll(&mut self, metrics: &ScrollMetrics) {
        let batch = self.evaluate(metrics);
        if batch.is_empty() {
            return;
        }
        log::trace!("Visibility batch with {} entries", batch.len());
        if let Some(callback) = self.callback.as_mut() {
            callback(&batch);
        }
    }
}
