// Detection pipeline - room classification, baseline region placement and
// live-vs-reference differencing.

pub mod classify;
pub mod context;
pub mod detector;
pub mod heatmap;
pub mod mask;
pub mod types;
pub mod watcher;


// Re-export the main types and functions for easy access
pub use classify::classify_room;
pub use context::{DetectionContext, RoomProfile};
pub use detector::detect_anomalies;
pub use mask::{label_rect, mask_dynamic};
pub use types::{AnomalyRecord, BaselineRegion, CycleOutcome, RegionBox};
pub use watcher::RoomWatcher;
