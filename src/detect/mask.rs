// Masking of the dynamic room-label area
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Rectangle covering the room-label area: bottom `height_frac` of the frame
/// by left `width_frac` of the frame. Returns `(x, y, width, height)`.
pub fn label_rect(
    width: u32,
    height: u32,
    height_frac: f32,
    width_frac: f32,
) -> (u32, u32, u32, u32) {
    let y0 = (height as f32 * (1.0 - height_frac)) as u32;
    let w = (width as f32 * width_frac) as u32;
    (0, y0, w, height - y0)
}

/// Return a copy of `image` with the label area filled with black.
///
/// Applied to both the live frame and the reference before differencing, so
/// the label text - which legitimately differs between frames - never
/// contributes to the anomaly signal. Idempotent; never mutates its input.
pub fn mask_dynamic(image: &RgbImage, height_frac: f32, width_frac: f32) -> RgbImage {
    let (x, y, w, h) = label_rect(image.width(), image.height(), height_frac, width_frac);
    let mut masked = image.clone();
    if w > 0 && h > 0 {
        draw_filled_rect_mut(
            &mut masked,
            Rect::at(x as i32, y as i32).of_size(w, h),
            Rgb([0, 0, 0]),
        );
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_frame(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 77])
        })
    }

    #[test]
    fn test_label_rect_fractions() {
        let (x, y, w, h) = label_rect(1000, 500, 0.20, 0.30);

        assert_eq!((x, y), (0, 400));
        assert_eq!((w, h), (300, 100));
    }

    #[test]
    fn test_mask_zeroes_label_area_only() {
        let frame = gradient_frame(100, 100);
        let masked = mask_dynamic(&frame, 0.20, 0.30);

        // Inside the label area: black
        assert_eq!(masked.get_pixel(0, 99), &Rgb([0, 0, 0]));
        assert_eq!(masked.get_pixel(29, 80), &Rgb([0, 0, 0]));
        // Outside: untouched
        assert_eq!(masked.get_pixel(30, 80), frame.get_pixel(30, 80));
        assert_eq!(masked.get_pixel(0, 79), frame.get_pixel(0, 79));
        assert_eq!(masked.get_pixel(99, 99), frame.get_pixel(99, 99));
    }

    #[test]
    fn test_mask_does_not_mutate_input() {
        let frame = gradient_frame(60, 60);
        let original = frame.clone();

        let _ = mask_dynamic(&frame, 0.20, 0.30);

        assert_eq!(frame, original, "Masking must copy, not mutate");
    }

    #[test]
    fn test_mask_is_idempotent() {
        let frame = gradient_frame(64, 48);

        let once = mask_dynamic(&frame, 0.20, 0.30);
        let twice = mask_dynamic(&once, 0.20, 0.30);

        assert_eq!(once, twice, "Masking an already-masked image must be a no-op");
    }
}
