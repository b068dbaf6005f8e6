use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for capture and detection operations.
pub type WatchResult<T> = Result<T, WatchError>;

/// The error type for the capture and detection pipeline.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to enumerate displays: {source}")]
    DisplayEnumerationFailed {
        #[from]
        source: xcap::XCapError,
    },

    #[error("No display found at index {index}")]
    DisplayNotFound { index: usize },

    #[error("Screen capture failed on display {index}: {source}")]
    CaptureFailed { index: usize, source: xcap::XCapError },

    #[error("Text recognition failed: {description}")]
    RecognitionFailed { description: String },

    #[error(
        "Live frame is {live_width}x{live_height} but the '{room}' reference is {reference_width}x{reference_height}. Baseline regions only apply at the reference resolution."
    )]
    GeometryMismatch {
        room: String,
        live_width: u32,
        live_height: u32,
        reference_width: u32,
        reference_height: u32,
    },

    #[error("Room library directory not found at {path:?}")]
    LibraryDirMissing { path: PathBuf },
}
