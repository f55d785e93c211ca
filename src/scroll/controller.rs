//! Scroll-sync controller: reading progress and active heading.

use super::progress::{reading_progress, ScrollMetrics};
use super::tracker::{VisibilityEntry, VisibilityTracker};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Reader scroll state for one displayed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Reading progress in `[0, 1]`
    pub progress: f64,

    /// Id of the heading currently in focus
    pub active_heading_id: Option<String>,
}

/// Synchronizes reader scroll position with a document's table of contents.
///
/// The controller is `Unmounted` until [`mount`](Self::mount) registers the
/// document's heading anchors with the tracker, and returns to `Unmounted`
/// on [`unmount`](Self::unmount), on the next `mount`, or when dropped. Every
/// registration made for a document is released before another document's
/// anchors are registered.
///
/// Execution is single-threaded: the tracker's batch callback shares the
/// state through `Rc<RefCell<_>>` and holds only a weak reference to it.
pub struct ScrollSync<T: VisibilityTracker> {
    tracker: T,
    state: Rc<RefCell<ScrollState>>,
    /// Registered anchor ids while mounted.
    mounted: Option<Vec<String>>,
    /// Most recent page geometry, kept across document switches.
    last_metrics: Option<ScrollMetrics>,
}

impl<T: VisibilityTracker> ScrollSync<T> {
    /// Create an unmounted controller driving `tracker`.
    pub fn new(tracker: T) -> Self {
        Self {
            tracker,
            state: Rc::new(RefCell::new(ScrollState::default())),
            mounted: None,
            last_metrics: None,
        }
    }

    /// Mount a document by registering its heading anchors.
    ///
    /// If another document is mounted, its registrations are released
    /// first. The scroll state starts fresh for the new document. When the
    /// controller has already seen a scroll position, it is replayed so the
    /// anchors already inside the band are reported without waiting for the
    /// next scroll event.
    pub fn mount<I, S>(&mut self, anchors: I)
    where
        I: IntoIterator<Item = (S, T::Element)>,
        S: Into<String>,
    {
        if self.mounted.is_some() {
            self.unmount();
        }

        *self.state.borrow_mut() = ScrollState::default();

        let state = Rc::downgrade(&self.state);
        self.tracker.on_visibility_batch(Box::new(move |entries: &[VisibilityEntry]| {
            if let Some(state) = state.upgrade() {
                apply_batch(&mut state.borrow_mut(), entries);
            }
        }));

        let mut ids = Vec::new();
        for (id, element) in anchors {
            let id: String = id.into();
            self.tracker.register(&id, element);
            ids.push(id);
        }

        log::debug!("Mounted scroll sync with {} anchors", ids.len());
        self.mounted = Some(ids);

        if let Some(metrics) = self.last_metrics {
            self.update(metrics);
        }
    }

    /// Mount a document at a known page geometry.
    ///
    /// Progress and the active heading are computed from `metrics`
    /// immediately, as a page load would report them.
    pub fn mount_at<I, S>(&mut self, anchors: I, metrics: ScrollMetrics) -> ScrollState
    where
        I: IntoIterator<Item = (S, T::Element)>,
        S: Into<String>,
    {
        self.last_metrics = Some(metrics);
        self.mount(anchors);
        self.state()
    }

    /// Release every anchor registration and the batch callback.
    ///
    /// Does nothing when already unmounted.
    pub fn unmount(&mut self) {
        let Some(ids) = self.mounted.take() else {
            return;
        };
        for id in &ids {
            self.tracker.unregister(id);
        }
        self.tracker.disconnect();
        log::debug!("Unmounted scroll sync, released {} anchors", ids.len());
    }

    /// Handle a scroll event.
    ///
    /// Updates reading progress and forwards the event to the tracker, which
    /// may report a visibility batch. While unmounted the state is left
    /// alone; the geometry is only remembered for the next `mount`.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> ScrollState {
        self.last_metrics = Some(metrics);
        if self.mounted.is_none() {
            log::trace!("Ignoring scroll event while unmounted");
            return self.state();
        }

        self.update(metrics);

        let state = self.state();
        log::trace!(
            "Scroll at {:.1}: progress {:.3}, active {:?}",
            metrics.scroll_top,
            state.progress,
            state.active_heading_id
        );
        state
    }

    fn update(&mut self, metrics: ScrollMetrics) {
        let progress = reading_progress(&metrics);
        self.state.borrow_mut().progress = progress;
        self.tracker.on_scroll(&metrics);
    }

    /// Snapshot of the current scroll state.
    pub fn state(&self) -> ScrollState {
        self.state.borrow().clone()
    }

    /// Current reading progress.
    pub fn progress(&self) -> f64 {
        self.state.borrow().progress
    }

    /// Id of the heading currently in focus.
    pub fn active_heading_id(&self) -> Option<String> {
        self.state.borrow().active_heading_id.clone()
    }

    /// Check if a document is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Anchor ids registered for the mounted document.
    pub fn anchor_ids(&self) -> &[String] {
        self.mounted.as_deref().unwrap_or(&[])
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }
}

impl<T: VisibilityTracker> Drop for ScrollSync<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// The last in-band entry of a batch becomes the active heading.
///
/// Not the topmost one: batches are in tracker order, and the last visible
/// entry wins. A batch with no visible entries leaves the state unchanged.
fn apply_batch(state: &mut ScrollState, entries: &[VisibilityEntry]) {
    if let Some(entry) = entries.iter().rev().find(|e| e.is_visible) {
        if state.active_heading_id.as_deref() != Some(entry.id.as_str()) {
            log::trace!("Active heading -> {}", entry.id);
        }
        state.active_heading_id = Some(entry.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{AnchorBox, BandTracker};

    #[test]
    fn test_apply_batch_last_visible_wins() {
        let mut state = ScrollState::default();
        apply_batch(
            &mut state,
            &[
                VisibilityEntry::new("a", true),
                VisibilityEntry::new("b", true),
                VisibilityEntry::new("c", false),
            ],
        );
        assert_eq!(state.active_heading_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_apply_batch_without_visible_keeps_state() {
        let mut state = ScrollState {
            progress: 0.2,
            active_heading_id: Some("a".into()),
        };
        apply_batch(&mut state, &[VisibilityEntry::new("a", false)]);
        assert_eq!(state.active_heading_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_scroll_ignored_when_unmounted() {
        let mut sync = ScrollSync::new(BandTracker::default());
        let state = sync.on_scroll(ScrollMetrics::new(500.0, 2000.0, 1000.0));
        assert_eq!(state, ScrollState::default());
    }

    #[test]
    fn test_mount_and_scroll() {
        let mut sync = ScrollSync::new(BandTracker::default());
        sync.mount(vec![
            ("intro", AnchorBox::new(150.0, 30.0)),
            ("details", AnchorBox::new(1200.0, 30.0)),
        ]);
        assert!(sync.is_mounted());
        assert_eq!(sync.anchor_ids(), ["intro".to_string(), "details".to_string()]);

        let state = sync.on_scroll(ScrollMetrics::new(0.0, 3000.0, 1000.0));
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.active_heading_id.as_deref(), Some("intro"));

        let state = sync.on_scroll(ScrollMetrics::new(1000.0, 3000.0, 1000.0));
        assert_eq!(state.progress, 0.5);
        assert_eq!(state.active_heading_id.as_deref(), Some("details"));
    }

    #[test]
    fn test_mount_at_reports_anchor_in_band() {
        let mut sync = ScrollSync::new(BandTracker::default());
        let state = sync.mount_at(
            vec![("intro", AnchorBox::new(200.0, 30.0))],
            ScrollMetrics::new(0.0, 3000.0, 1000.0),
        );
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.active_heading_id.as_deref(), Some("intro"));
    }

    #[test]
    fn test_remount_replays_last_position() {
        let mut sync = ScrollSync::new(BandTracker::default());
        sync.mount(vec![("old", AnchorBox::new(0.0, 10.0))]);
        sync.on_scroll(ScrollMetrics::new(1000.0, 3000.0, 1000.0));

        sync.mount(vec![
            ("first", AnchorBox::new(100.0, 30.0)),
            ("second", AnchorBox::new(1250.0, 30.0)),
        ]);
        let state = sync.state();
        assert_eq!(state.progress, 0.5);
        assert_eq!(state.active_heading_id.as_deref(), Some("second"));
    }

    #[test]
    fn test_geometry_seen_while_unmounted_applies_on_mount() {
        let mut sync = ScrollSync::new(BandTracker::default());
        assert_eq!(
            sync.on_scroll(ScrollMetrics::new(0.0, 2000.0, 1000.0)),
            ScrollState::default()
        );
        sync.mount(vec![("top", AnchorBox::new(300.0, 30.0))]);
        assert_eq!(sync.active_heading_id().as_deref(), Some("top"));
    }

    #[test]
    fn test_unmount_releases_tracker() {
        let mut sync = ScrollSync::new(BandTracker::default());
        sync.mount(vec![("a", AnchorBox::new(0.0, 10.0))]);
        sync.unmount();
        assert!(!sync.is_mounted());
        assert!(sync.tracker().is_empty());
        assert!(!sync.tracker().has_callback());
        assert!(sync.anchor_ids().is_empty());
    }
}
