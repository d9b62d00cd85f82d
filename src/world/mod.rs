mod camera;
mod raster;
mod texture;

pub use camera::{CameraConfig, CameraState, Command, ConfigError, MOVE_STEP, TURN_STEP};

pub use raster::{Raster, Terrain, TerrainSource};

pub use texture::{Texture, TextureError};
