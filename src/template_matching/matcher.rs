/// Crop placement via normalized cross-correlation
use super::types::{CropTemplate, Placement};
use image::GrayImage;
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};

/// Find the best placement of a single crop within a reference image.
///
/// Scores every valid offset with normalized cross-correlation and keeps the
/// maximum. Returns `None` when the crop does not fit inside the reference,
/// or when the best score falls below `threshold` - the feature is simply
/// absent from this reference, not an error.
pub fn best_placement(
    reference: &GrayImage,
    crop: &CropTemplate,
    threshold: f32,
) -> Option<Placement> {
    let (crop_width, crop_height) = crop.image.dimensions();
    if crop_width == 0
        || crop_height == 0
        || crop_width > reference.width()
        || crop_height > reference.height()
    {
        log::warn!(
            "Crop '{}' ({}x{}) does not fit the {}x{} reference, skipping",
            crop.name,
            crop_width,
            crop_height,
            reference.width(),
            reference.height()
        );
        return None;
    }

    let scores = match_template(
        reference,
        &crop.image,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );
    let extremes = find_extremes(&scores);
    let (x, y) = extremes.max_value_location;
    let score = extremes.max_value;

    if score >= threshold {
        log::debug!(
            "Crop '{}' placed at ({},{}) with score {:.3}",
            crop.name,
            x,
            y,
            score
        );
        Some(Placement {
            x,
            y,
            width: crop_width,
            height: crop_height,
            score,
        })
    } else {
        log::debug!(
            "Crop '{}' best score {:.3} below threshold {:.2}, omitted",
            crop.name,
            score,
            threshold
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Non-repeating test pattern, values kept well under 255.
    fn pattern(x: u32, y: u32) -> u8 {
        ((x * 7 + y * 13) % 97) as u8
    }

    fn reference_with_feature(x0: u32, y0: u32, width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(200, 160, |x, y| {
            if x >= x0 && x < x0 + width && y >= y0 && y < y0 + height {
                image::Luma([pattern(x - x0, y - y0)])
            } else {
                image::Luma([200])
            }
        })
    }

    fn feature_crop(width: u32, height: u32) -> CropTemplate {
        CropTemplate {
            name: "feature".to_string(),
            image: GrayImage::from_fn(width, height, |x, y| image::Luma([pattern(x, y)])),
        }
    }

    #[test]
    fn test_placement_found_at_exact_offset() {
        let reference = reference_with_feature(130, 40, 50, 40);
        let crop = feature_crop(50, 40);

        let placement = best_placement(&reference, &crop, 0.8).expect("crop should be placed");

        assert_eq!((placement.x, placement.y), (130, 40));
        assert_eq!((placement.width, placement.height), (50, 40));
        assert!(
            placement.score > 0.99,
            "Exact content should score near 1.0, got {:.4}",
            placement.score
        );
    }

    #[test]
    fn test_absent_crop_is_omitted() {
        // Checkerboard never appears in the uniform reference; its best
        // correlation against a flat region is mean/rms ~= 0.71.
        let reference = GrayImage::from_pixel(120, 120, image::Luma([100]));
        let crop = CropTemplate {
            name: "checker".to_string(),
            image: GrayImage::from_fn(20, 20, |x, y| {
                image::Luma([if (x + y) % 2 == 0 { 0 } else { 255 }])
            }),
        };

        assert!(best_placement(&reference, &crop, 0.9).is_none());
    }

    #[test]
    fn test_oversized_crop_is_skipped() {
        let reference = GrayImage::from_pixel(50, 50, image::Luma([100]));
        let crop = feature_crop(60, 40);

        assert!(best_placement(&reference, &crop, 0.5).is_none());
    }

    #[test]
    fn test_placement_is_deterministic() {
        let reference = reference_with_feature(20, 60, 30, 30);
        let crop = feature_crop(30, 30);

        let first = best_placement(&reference, &crop, 0.8);
        let second = best_placement(&reference, &crop, 0.8);

        assert_eq!(first, second, "Identical inputs must place identically");
    }
}
