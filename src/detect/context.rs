// Room library loading and one-time baseline region placement
use super::types::{BaselineRegion, RegionBox};
use crate::config::WatchConfig;
use crate::error::{WatchError, WatchResult};
use crate::template_matching::{self, CropTemplate};
use image::{GrayImage, RgbImage};
use std::fs;

/// Everything known about one room: its reference frame and where each
/// labeled crop sits within it.
pub struct RoomProfile {
    pub name: String,
    pub reference: RgbImage,
    pub regions: Vec<BaselineRegion>,
}

/// Immutable-after-init state shared by every detection cycle.
///
/// Construction loads each room's reference image and crops from the library
/// directory and places every crop once; the placements are reused for the
/// lifetime of the process. Rooms with a missing or unreadable reference are
/// excluded with a warning, as are crops that fail to load or score below the
/// match threshold.
pub struct DetectionContext {
    config: WatchConfig,
    profiles: Vec<RoomProfile>,
}

impl DetectionContext {
    pub fn load(config: WatchConfig) -> WatchResult<Self> {
        if !config.library_dir.is_dir() {
            return Err(WatchError::LibraryDirMissing {
                path: config.library_dir.clone(),
            });
        }

        let mut profiles = Vec::new();
        for room in &config.rooms {
            match Self::load_room(&config, room) {
                Some(profile) => {
                    log::info!(
                        "Room '{}': {} baseline region(s) placed",
                        room,
                        profile.regions.len()
                    );
                    profiles.push(profile);
                }
                None => log::warn!(
                    "Room '{room}' has no usable reference image, excluded from detection"
                ),
            }
        }
        Ok(Self { config, profiles })
    }

    fn load_room(config: &WatchConfig, room: &str) -> Option<RoomProfile> {
        let reference_path = config.reference_path(room);
        let reference = match image::open(&reference_path) {
            Ok(img) => img.to_rgb8(),
            Err(e) => {
                log::warn!("Failed to load {reference_path:?}: {e}");
                return None;
            }
        };

        let crops = Self::load_crops(config, room);
        let reference_gray = image::imageops::grayscale(&reference);
        let regions = Self::place_crops(&reference_gray, &crops, config.match_threshold);

        Some(RoomProfile {
            name: room.to_string(),
            reference,
            regions,
        })
    }

    /// Load a room's grayscale crops, sorted by name so region order is
    /// stable across runs.
    fn load_crops(config: &WatchConfig, room: &str) -> Vec<CropTemplate> {
        let dir = config.crop_dir(room);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => {
                log::debug!("No crop directory for room '{room}'");
                return Vec::new();
            }
        };

        let mut crops = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_png = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png || !path.is_file() {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match image::open(&path) {
                Ok(img) => crops.push(CropTemplate {
                    name: name.to_string(),
                    image: img.to_luma8(),
                }),
                Err(e) => log::warn!("Failed to load crop {path:?}: {e}"),
            }
        }
        crops.sort_by(|a, b| a.name.cmp(&b.name));
        crops
    }

    fn place_crops(
        reference: &GrayImage,
        crops: &[CropTemplate],
        threshold: f32,
    ) -> Vec<BaselineRegion> {
        let mut regions = Vec::new();
        for crop in crops {
            if let Some(placement) = template_matching::best_placement(reference, crop, threshold) {
                regions.push(BaselineRegion {
                    class_name: crop.name.clone(),
                    region: RegionBox {
                        x0: placement.x,
                        y0: placement.y,
                        x1: placement.x + placement.width,
                        y1: placement.y + placement.height,
                    },
                    score: placement.score,
                });
            }
        }
        regions
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn profiles(&self) -> &[RoomProfile] {
        &self.profiles
    }

    pub fn profile(&self, room: &str) -> Option<&RoomProfile> {
        self.profiles.iter().find(|profile| profile.name == room)
    }
}
