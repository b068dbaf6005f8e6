//! Text recognition over the room-label area

use crate::error::{WatchError, WatchResult};
use image::GrayImage;
use std::collections::HashMap;

/// A single span of recognized text.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub text: String,
    /// Engine-reported confidence (0.0 to 100.0 for Tesseract word data).
    pub confidence: f32,
}

/// Text recognition engine boundary.
///
/// Spans are returned in the engine's own output order; callers must not
/// assume any additional sorting.
pub trait TextRecognizer {
    fn recognize(&self, image: &GrayImage) -> WatchResult<Vec<TextSpan>>;
}

/// Tesseract-backed recognizer.
pub struct TesseractRecognizer {
    lang: String,
}

impl TesseractRecognizer {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &GrayImage) -> WatchResult<Vec<TextSpan>> {
        let dynamic = image::DynamicImage::ImageLuma8(image.clone());
        let tess_image = rusty_tesseract::Image::from_dynamic_image(&dynamic).map_err(|e| {
            WatchError::RecognitionFailed {
                description: e.to_string(),
            }
        })?;

        let args = rusty_tesseract::Args {
            lang: self.lang.clone(),
            config_variables: HashMap::new(),
            dpi: Some(150),
            // Treat the label area as a single uniform block of text
            psm: Some(6),
            oem: Some(3),
        };

        let output = rusty_tesseract::image_to_data(&tess_image, &args).map_err(|e| {
            WatchError::RecognitionFailed {
                description: e.to_string(),
            }
        })?;

        let spans = output
            .data
            .into_iter()
            .filter(|word| !word.text.trim().is_empty())
            .map(|word| TextSpan {
                text: word.text,
                confidence: word.conf,
            })
            .collect();
        Ok(spans)
    }
}
