/// Template matching for locating labeled crops within room reference images
///
/// Placement runs once per room when the detection context is built; the
/// resulting boxes are reused by every detection cycle afterwards.
pub mod matcher;
pub mod types;

pub use matcher::best_placement;
pub use types::{CropTemplate, Placement};
