/// Template matching data types
use image::GrayImage;

/// A named grayscale crop searched for within a room's reference image.
#[derive(Debug, Clone)]
pub struct CropTemplate {
    /// Feature label, taken from the crop's file stem (e.g. "clock", "painting").
    pub name: String,
    pub image: GrayImage,
}

/// Best placement of a crop within a reference image.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// X coordinate of the top-left corner, in reference pixels.
    pub x: u32,
    /// Y coordinate of the top-left corner, in reference pixels.
    pub y: u32,
    /// Width, always equal to the matched crop's.
    pub width: u32,
    /// Height, always equal to the matched crop's.
    pub height: u32,
    /// Normalized cross-correlation score at this placement.
    pub score: f32,
}
