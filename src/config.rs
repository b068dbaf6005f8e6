//! Tunable configuration and room-library path layout

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the capture and detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Directory holding one subdirectory per room: the reference image plus
    /// its labeled crops.
    pub library_dir: PathBuf,
    /// Room names in match-priority order. Classification returns the first
    /// room whose name appears in the recognized label text.
    pub rooms: Vec<String>,
    /// Index into the display list reported by the OS.
    pub display_index: usize,
    /// Confidence threshold for accepting a crop placement (0.0 to 1.0).
    pub match_threshold: f32,
    /// Intensity delta above which a difference pixel counts as changed.
    pub binary_threshold: u8,
    /// Changed-pixel count above which a region is flagged as an anomaly.
    pub pixel_count_threshold: u32,
    /// Fraction of frame height (from the bottom) covered by the label mask.
    pub mask_height_frac: f32,
    /// Fraction of frame width (from the left) covered by the label mask.
    pub mask_width_frac: f32,
    /// Language passed to the OCR engine.
    pub ocr_lang: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            library_dir: PathBuf::from("rooms"),
            rooms: ["Living", "Kitchen", "Bedroom", "Bathroom", "Entryway", "Yard"]
                .map(String::from)
                .to_vec(),
            display_index: 0,
            match_threshold: 0.8,
            binary_threshold: 30,
            pixel_count_threshold: 1000,
            mask_height_frac: 0.20,
            mask_width_frac: 0.30,
            ocr_lang: "eng".to_string(),
        }
    }
}

impl WatchConfig {
    pub fn room_dir(&self, room: &str) -> PathBuf {
        self.library_dir.join(room)
    }

    /// Path of the room's full-frame reference image.
    pub fn reference_path(&self, room: &str) -> PathBuf {
        self.room_dir(room).join("template.png")
    }

    /// Directory of the room's labeled grayscale crops.
    pub fn crop_dir(&self, room: &str) -> PathBuf {
        self.room_dir(room).join("group_templates")
    }

    /// Path of a single labeled crop, for side-by-side display against a
    /// heatmap.
    pub fn crop_path(&self, room: &str, class_name: &str) -> PathBuf {
        self.crop_dir(room).join(format!("{class_name}.png"))
    }

    /// Output path for a flagged region's heatmap.
    pub fn heatmap_path(&self, room: &str, class_name: &str, timestamp: &str) -> PathBuf {
        self.room_dir(room)
            .join(format!("{room}_{class_name}_{timestamp}_HEAT.png"))
    }
}
