//! Command-line configuration for the viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::world::{CameraConfig, CameraState, ConfigError};

/// Voxel Space terrain viewer.
///
/// Arrows move/turn, Home/End height, Insert/Delete horizon,
/// PageUp/PageDown FOV, `,`/`.` distance, `[`/`]` column width,
/// `-`/`=` depth slices, Space locks height to the terrain, Esc quits.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Opts {
    /// Top-down colour map (square image)
    #[arg(long, value_name = "FILE")]
    pub color_map: PathBuf,

    /// Grayscale height map, same size as the colour map
    #[arg(long, value_name = "FILE")]
    pub height_map: PathBuf,

    /// Optional sky background image
    #[arg(long, value_name = "FILE")]
    pub sky: Option<PathBuf>,

    /// Size of the sky window stretched over the screen (default: whole image)
    #[arg(long, value_names = ["W", "H"], num_args = 2)]
    pub sky_window: Option<Vec<usize>>,

    /// Window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// Frame-rate cap handed to the window
    #[arg(long, default_value_t = 60)]
    pub target_fps: usize,

    #[arg(long, default_value_t = 445.0, allow_negative_numbers = true)]
    pub x: f32,

    #[arg(long, default_value_t = 400.0, allow_negative_numbers = true)]
    pub y: f32,

    /// Eye height above the terrain baseline
    #[arg(long, default_value_t = 250.0, allow_negative_numbers = true)]
    pub altitude: f32,

    /// Heading in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle: f32,

    /// Vertical screen offset of the horizon (look up/down)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub horizon: i32,

    /// Maximum render depth in map units
    #[arg(long, default_value_t = 1800.0)]
    pub distance: f32,

    /// Depth slices per frame
    #[arg(long, default_value_t = 800)]
    pub detail: u32,

    /// Screen pixels per sampled column
    #[arg(long, default_value_t = 2)]
    pub fidelity: u32,

    /// Half-spread of the view in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub fov: f32,

    /// Keep the eye at a fixed height above the ground under it
    #[arg(long)]
    pub attach_terrain: bool,
}

impl Opts {
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            x: self.x,
            y: self.y,
            height: self.altitude,
            angle: self.angle,
            horizon: self.horizon,
            distance: self.distance,
            detail: self.detail,
            fidelity: self.fidelity,
            fov: self.fov,
            attach_terrain: self.attach_terrain,
        }
    }

    /// Validated start-up camera.
    pub fn camera(&self) -> Result<CameraState, ConfigError> {
        CameraState::new(self.camera_config())
    }
}
