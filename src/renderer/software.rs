//! Classic software (CPU) layers: the sky background and the Voxel Space
//! terrain renderer, plus the frustum projector the latter depends on.

mod fov;
mod sky;
mod voxel;

pub use fov::{DEG_TO_RAD, FovProjector, Segment};
pub use sky::SkyLayer;
pub use voxel::{ELEVATION_DIVISOR, HEIGHT_SCALE, MAP_SCALE, VoxelRenderer, slice_depth};
