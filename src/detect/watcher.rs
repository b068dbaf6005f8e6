// Capture-classify-detect cycle driver
use super::classify::classify_room;
use super::context::DetectionContext;
use super::detector::detect_anomalies;
use super::types::CycleOutcome;
use crate::capture::FrameSource;
use crate::error::WatchResult;
use crate::ocr::TextRecognizer;

/// Runs detection cycles against an immutable context.
///
/// One call to [`RoomWatcher::process_frame`] is one cycle; the caller owns
/// the cadence. Everything here is synchronous blocking work.
pub struct RoomWatcher<S, R> {
    context: DetectionContext,
    source: S,
    recognizer: R,
}

impl<S: FrameSource, R: TextRecognizer> RoomWatcher<S, R> {
    pub fn new(context: DetectionContext, source: S, recognizer: R) -> Self {
        Self {
            context,
            source,
            recognizer,
        }
    }

    pub fn context(&self) -> &DetectionContext {
        &self.context
    }

    /// Capture one frame, classify its room and compare its baseline regions.
    ///
    /// A failed classification, or a classified room without a usable
    /// profile, yields an empty outcome. Capture failure is the only error
    /// that aborts the cycle, along with a live/reference resolution mismatch
    /// (see [`detect_anomalies`]).
    pub fn process_frame(&self) -> WatchResult<CycleOutcome> {
        let frame = self.source.capture()?;
        let config = self.context.config();

        let Some(room) = classify_room(&frame, &self.recognizer, config) else {
            log::debug!("No room label recognized in this frame");
            return Ok(CycleOutcome {
                room: None,
                anomalies: Vec::new(),
            });
        };

        let Some(profile) = self.context.profile(&room) else {
            return Ok(CycleOutcome {
                room: Some(room),
                anomalies: Vec::new(),
            });
        };

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let anomalies = detect_anomalies(config, profile, &frame, &timestamp)?;
        Ok(CycleOutcome {
            room: Some(room),
            anomalies,
        })
    }
}
