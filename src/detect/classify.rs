// Room classification from the on-screen location label
use super::mask::label_rect;
use crate::config::WatchConfig;
use crate::ocr::TextRecognizer;
use image::RgbImage;

/// Identify which room a frame shows by reading the location label.
///
/// The label area is cropped out of the frame, converted to grayscale and run
/// through the recognizer. Rooms are checked in declaration order; the first
/// room whose name appears (case-insensitively) inside any recognized span
/// wins. Returns `None` when nothing matches or the recognizer fails -
/// recognition is best-effort and a miss just skips this cycle's comparison.
pub fn classify_room(
    frame: &RgbImage,
    recognizer: &dyn TextRecognizer,
    config: &WatchConfig,
) -> Option<String> {
    let (x, y, w, h) = label_rect(
        frame.width(),
        frame.height(),
        config.mask_height_frac,
        config.mask_width_frac,
    );
    if w == 0 || h == 0 {
        return None;
    }

    let roi = image::imageops::crop_imm(frame, x, y, w, h).to_image();
    let gray = image::imageops::grayscale(&roi);

    let spans = match recognizer.recognize(&gray) {
        Ok(spans) => spans,
        Err(e) => {
            log::warn!("Label recognition failed: {e}");
            return None;
        }
    };

    for room in &config.rooms {
        let needle = room.to_lowercase();
        for span in &spans {
            if span.text.to_lowercase().contains(&needle) {
                log::debug!(
                    "Matched room '{}' in span '{}' (conf {:.1})",
                    room,
                    span.text.trim(),
                    span.confidence
                );
                return Some(room.clone());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WatchResult;
    use crate::ocr::{TextRecognizer, TextSpan};
    use image::GrayImage;
    use std::cell::RefCell;

    struct FixedSpans(Vec<&'static str>);

    impl TextRecognizer for FixedSpans {
        fn recognize(&self, _image: &GrayImage) -> WatchResult<Vec<TextSpan>> {
            Ok(self
                .0
                .iter()
                .map(|text| TextSpan {
                    text: text.to_string(),
                    confidence: 90.0,
                })
                .collect())
        }
    }

    /// Records the dimensions of the image handed to the recognizer.
    struct DimensionProbe(RefCell<Option<(u32, u32)>>);

    impl TextRecognizer for DimensionProbe {
        fn recognize(&self, image: &GrayImage) -> WatchResult<Vec<TextSpan>> {
            *self.0.borrow_mut() = Some(image.dimensions());
            Ok(Vec::new())
        }
    }

    fn frame(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb([120, 120, 120]))
    }

    #[test]
    fn test_substring_match_inside_longer_span() {
        let config = WatchConfig::default();
        let recognizer = FixedSpans(vec!["cam 3", "THE KITCHEN, 02:14"]);

        let room = classify_room(&frame(640, 480), &recognizer, &config);

        assert_eq!(room.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn test_no_room_name_returns_none() {
        let config = WatchConfig::default();
        let recognizer = FixedSpans(vec!["static", "02:14"]);

        assert_eq!(classify_room(&frame(640, 480), &recognizer, &config), None);
    }

    #[test]
    fn test_no_spans_returns_none() {
        let config = WatchConfig::default();
        let recognizer = FixedSpans(vec![]);

        assert_eq!(classify_room(&frame(640, 480), &recognizer, &config), None);
    }

    #[test]
    fn test_room_declaration_order_breaks_ties() {
        // Both Bedroom and Kitchen appear; Kitchen is declared first.
        let config = WatchConfig {
            rooms: vec!["Kitchen".into(), "Bedroom".into()],
            ..WatchConfig::default()
        };
        let recognizer = FixedSpans(vec!["Bedroom door", "Kitchen sink"]);

        let room = classify_room(&frame(640, 480), &recognizer, &config);

        assert_eq!(room.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn test_recognizer_sees_label_area_only() {
        let config = WatchConfig::default();
        let probe = DimensionProbe(RefCell::new(None));

        let _ = classify_room(&frame(1000, 500), &probe, &config);

        // Bottom 20% x left 30% of a 1000x500 frame
        assert_eq!(*probe.0.borrow(), Some((300, 100)));
    }
}
