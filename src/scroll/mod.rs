//! Reader scroll synchronization.
//!
//! Tracks two independent measures while a document is displayed: reading
//! progress derived from page scroll geometry, and the active heading derived
//! from which anchors sit inside the viewport focus band.
//!
//! # Example
//!
//! ```
//! use readmark::scroll::{AnchorBox, BandTracker, ScrollMetrics, ScrollSync};
//!
//! let mut sync = ScrollSync::new(BandTracker::default());
//! sync.mount(vec![
//!     ("introduction", AnchorBox::new(150.0, 32.0)),
//!     ("the-details", AnchorBox::new(1400.0, 32.0)),
//! ]);
//!
//! let state = sync.on_scroll(ScrollMetrics::new(1250.0, 3500.0, 1000.0));
//! assert_eq!(state.progress, 0.5);
//! assert_eq!(state.active_heading_id.as_deref(), Some("the-details"));
//! ```

mod controller;
mod options;
mod progress;
mod tracker;

pub use controller::{ScrollState, ScrollSync};
pub use options::ViewportBand;
pub use progress::{reading_progress, ScrollMetrics};
pub use tracker::{AnchorBox, BandTracker, BatchCallback, VisibilityEntry, VisibilityTracker};
