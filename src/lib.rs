//! Screen-capture anomaly detection for observation-duty style games.
//!
//! The pipeline captures the configured display, reads the on-screen room
//! label to classify the current room, then compares cached baseline regions
//! of that room's reference frame against the live frame and flags regions
//! whose pixel-level difference exceeds the configured thresholds.

pub mod args;
pub mod capture;
pub mod config;
pub mod detect;
pub mod error;
pub mod ocr;
pub mod template_matching;

pub use capture::{DisplayCapturer, FrameSource};
pub use config::WatchConfig;
pub use detect::{AnomalyRecord, CycleOutcome, DetectionContext, RoomWatcher};
pub use error::{WatchError, WatchResult};
pub use ocr::{TesseractRecognizer, TextRecognizer};
