// Per-region differencing, thresholding and anomaly records
use super::context::RoomProfile;
use super::heatmap;
use super::mask::mask_dynamic;
use super::types::{AnomalyRecord, RegionBox};
use crate::config::WatchConfig;
use crate::error::{WatchError, WatchResult};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::map::map_colors2;
use std::path::PathBuf;

/// Compare a live frame against a room's reference and flag changed regions.
///
/// Both frames are masked, then every baseline region is cropped out of both,
/// differenced, binarized and counted. Regions whose changed-pixel count
/// strictly exceeds the configured threshold yield an [`AnomalyRecord`]; the
/// heatmap write is best-effort and a failed write keeps the record with an
/// absent path.
///
/// A live frame whose resolution differs from the reference fails the whole
/// cycle: the baseline regions were placed in reference pixel space and
/// applying them elsewhere would compare the wrong pixels.
pub fn detect_anomalies(
    config: &WatchConfig,
    profile: &RoomProfile,
    live_frame: &RgbImage,
    timestamp: &str,
) -> WatchResult<Vec<AnomalyRecord>> {
    if profile.regions.is_empty() {
        return Ok(Vec::new());
    }

    let (live_width, live_height) = live_frame.dimensions();
    let (reference_width, reference_height) = profile.reference.dimensions();
    if (live_width, live_height) != (reference_width, reference_height) {
        return Err(WatchError::GeometryMismatch {
            room: profile.name.clone(),
            live_width,
            live_height,
            reference_width,
            reference_height,
        });
    }

    let live_masked = mask_dynamic(live_frame, config.mask_height_frac, config.mask_width_frac);
    let reference_masked = mask_dynamic(
        &profile.reference,
        config.mask_height_frac,
        config.mask_width_frac,
    );

    let mut anomalies = Vec::new();
    for baseline in &profile.regions {
        let live_crop = crop_box(&live_masked, baseline.region);
        let reference_crop = crop_box(&reference_masked, baseline.region);

        let binary = binarized_difference(&live_crop, &reference_crop, config.binary_threshold);
        let pixel_count = count_set(&binary);

        if pixel_count > config.pixel_count_threshold {
            log::info!(
                "Anomaly in '{}/{}': {} changed pixel(s)",
                profile.name,
                baseline.class_name,
                pixel_count
            );
            let heatmap_path = write_heatmap(
                config,
                &profile.name,
                &baseline.class_name,
                timestamp,
                &live_crop,
                &binary,
            );
            anomalies.push(AnomalyRecord {
                class_name: baseline.class_name.clone(),
                region: baseline.region,
                pixel_count,
                heatmap_path,
            });
        }
    }
    Ok(anomalies)
}

fn crop_box(image: &RgbImage, region: RegionBox) -> RgbImage {
    image::imageops::crop_imm(image, region.x0, region.y0, region.width(), region.height())
        .to_image()
}

/// Absolute per-pixel difference, reduced to intensity and thresholded.
///
/// Deltas at or below the threshold (anti-aliasing, compression noise, the
/// game's lighting shimmer) drop out; only strictly greater intensities
/// survive as set pixels.
fn binarized_difference(live: &RgbImage, reference: &RgbImage, binary_threshold: u8) -> GrayImage {
    let diff = map_colors2(live, reference, |l, r| {
        Rgb([
            l[0].abs_diff(r[0]),
            l[1].abs_diff(r[1]),
            l[2].abs_diff(r[2]),
        ])
    });
    let gray = image::imageops::grayscale(&diff);
    threshold(&gray, binary_threshold, ThresholdType::Binary)
}

fn count_set(binary: &GrayImage) -> u32 {
    binary.as_raw().iter().filter(|&&value| value != 0).count() as u32
}

/// Render and write the heatmap for a flagged region.
///
/// Returns `None` (with a warning) when the write fails; detection of the
/// remaining regions continues.
fn write_heatmap(
    config: &WatchConfig,
    room: &str,
    class_name: &str,
    timestamp: &str,
    live_crop: &RgbImage,
    binary: &GrayImage,
) -> Option<PathBuf> {
    let heat = heatmap::colorize(binary);
    let blended = heatmap::overlay(live_crop, &heat);
    let path = config.heatmap_path(room, class_name, timestamp);
    match blended.save(&path) {
        Ok(()) => Some(path),
        Err(e) => {
            log::warn!("Failed to write heatmap {path:?}: {e}");
            None
        }
    }
}
