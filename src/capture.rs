//! Display capture

use crate::error::{WatchError, WatchResult};
use image::RgbImage;

/// Source of full-frame captures for the detection pipeline.
///
/// Implemented by the live display grabber; tests substitute canned frames.
pub trait FrameSource {
    fn capture(&self) -> WatchResult<RgbImage>;
}

/// Captures a fixed display via the OS capture API.
pub struct DisplayCapturer {
    display_index: usize,
}

impl DisplayCapturer {
    pub fn new(display_index: usize) -> Self {
        Self { display_index }
    }
}

impl FrameSource for DisplayCapturer {
    fn capture(&self) -> WatchResult<RgbImage> {
        let start = std::time::Instant::now();

        let monitors = xcap::Monitor::all()?;
        let monitor = monitors
            .into_iter()
            .nth(self.display_index)
            .ok_or(WatchError::DisplayNotFound {
                index: self.display_index,
            })?;

        let frame = monitor
            .capture_image()
            .map_err(|source| WatchError::CaptureFailed {
                index: self.display_index,
                source,
            })?;

        // Alpha carries no signal for differencing
        let rgb = image::DynamicImage::ImageRgba8(frame).to_rgb8();
        log::debug!(
            "Captured display {} ({}x{}) in {}ms",
            self.display_index,
            rgb.width(),
            rgb.height(),
            start.elapsed().as_millis()
        );
        Ok(rgb)
    }
}
