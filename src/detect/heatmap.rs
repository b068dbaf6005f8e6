// Heatmap rendering for flagged regions
use image::{GrayImage, Rgb, RgbImage};
use imageproc::map::map_colors2;

/// Map an intensity to the familiar blue-to-red thermal ramp.
fn thermal(value: u8) -> Rgb<u8> {
    let v = value as f32 / 255.0;
    let channel = |center: f32| (((1.5 - (4.0 * v - center).abs()).clamp(0.0, 1.0)) * 255.0) as u8;
    Rgb([channel(3.0), channel(2.0), channel(1.0)])
}

/// Colorize a binarized difference image.
pub fn colorize(binary: &GrayImage) -> RgbImage {
    let mut out = RgbImage::new(binary.width(), binary.height());
    for (x, y, pixel) in binary.enumerate_pixels() {
        out.put_pixel(x, y, thermal(pixel[0]));
    }
    out
}

/// Blend the colorized difference over the live crop as a hot highlight.
///
/// The weights sum past 1.0 on purpose: flagged pixels clip toward white so
/// they stand out against the scene.
pub fn overlay(live: &RgbImage, heat: &RgbImage) -> RgbImage {
    map_colors2(live, heat, |l, h| {
        Rgb([
            blend_channel(l[0], h[0]),
            blend_channel(l[1], h[1]),
            blend_channel(l[2], h[2]),
        ])
    })
}

fn blend_channel(live: u8, heat: u8) -> u8 {
    (live as f32 * 0.7 + heat as f32 * 0.5).round().min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_endpoints() {
        // Unset pixels render cold (blue-ish), set pixels warm (red-ish)
        let cold = thermal(0);
        let warm = thermal(255);

        assert_eq!(cold[0], 0, "Cold end has no red");
        assert!(cold[2] > 100, "Cold end is blue");
        assert!(warm[0] > 100, "Warm end is red");
        assert_eq!(warm[2], 0, "Warm end has no blue");
    }

    #[test]
    fn test_colorize_dimensions_preserved() {
        let binary = GrayImage::from_pixel(17, 9, image::Luma([255]));

        let heat = colorize(&binary);

        assert_eq!(heat.dimensions(), (17, 9));
    }

    #[test]
    fn test_overlay_clips_at_white() {
        let live = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let heat = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));

        let blended = overlay(&live, &heat);

        // 0.7 * 255 + 0.5 * 255 > 255, so the blend saturates
        assert_eq!(blended.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_overlay_weights() {
        let live = RgbImage::from_pixel(2, 2, Rgb([100, 0, 200]));
        let heat = RgbImage::from_pixel(2, 2, Rgb([0, 100, 100]));

        let blended = overlay(&live, &heat);

        assert_eq!(blended.get_pixel(0, 0), &Rgb([70, 50, 190]));
    }
}
