//! ---------------------------------------------------------------------------
//! Voxel Space column renderer
//!
//! * Marches depth slices **near to far**.  Slice depth grows exponentially
//!   (`z = 2^(10t − 10) · distance`), so slices crowd the foreground where
//!   perspective needs them and thin out towards the horizon.
//! * Each slice is a straight line across the map between the two frustum
//!   edges; walking it left to right yields one terrain sample per screen
//!   column.
//! * One `f32` per column (the *frontier*) records the highest row drawn so
//!   far.  A sample only fills rows between its projected height and that
//!   frontier, so farther terrain can never paint over nearer terrain and no
//!   depth buffer is needed.
//! ---------------------------------------------------------------------------

use log::trace;

use super::fov::FovProjector;
use crate::{
    color::Rgb,
    renderer::{FrameBuffer, Layer},
    world::{CameraState, Terrain, TerrainSource},
};

/// Map units → texels.
pub const MAP_SCALE: f32 = 0.2;
/// Numerator of the per-slice perspective factor `HEIGHT_SCALE / z`.
pub const HEIGHT_SCALE: f32 = 100.0;
/// Elevation 0‥255 is stretched by `screen_height / ELEVATION_DIVISOR`.
pub const ELEVATION_DIVISOR: f32 = 128.0;

/// Depth of the slice at normalised position `t ∈ [0, 1)`.
#[inline]
pub fn slice_depth(t: f32, distance: f32) -> f32 {
    (10.0 * t - 10.0).exp2() * distance
}

/// Everything that stays constant across the slices of one frame.
#[derive(Clone, Copy, Debug)]
struct FrameSetup {
    fov: FovProjector,
    width: usize,
    /// Screen rows per elevation unit.
    v_scale: f32,
    /// Eye height in screen units.
    eye: f32,
}

/// Heightmap terrain renderer.  Owns the terrain and the per-column
/// occlusion frontier; the frame buffer is borrowed for each frame.
pub struct VoxelRenderer<T: TerrainSource = Terrain> {
    terrain: T,
    frontier: Vec<f32>,
}

impl<T: TerrainSource> VoxelRenderer<T> {
    pub fn new(terrain: T) -> Self {
        Self {
            terrain,
            frontier: Vec::new(),
        }
    }

    #[inline]
    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// Topmost row claimed in each column by the last rendered frame.
    #[inline]
    pub fn frontier(&self) -> &[f32] {
        &self.frontier
    }

    /// Draw the terrain seen from `camera` over the contents of `fb`.
    pub fn render_frame(&mut self, camera: &CameraState, fb: &mut FrameBuffer) {
        let setup = self.begin_frame(camera, fb);
        let detail = camera.detail();
        for s in 0..detail {
            self.draw_slice(camera, &setup, s as f32 / detail as f32, fb);
        }
        trace!(
            "voxel frame: {} slices × {} columns",
            detail,
            setup.width.div_ceil(camera.fidelity() as usize)
        );
    }

    /// Reset the frontier and derive the per-frame constants.
    fn begin_frame(&mut self, camera: &CameraState, fb: &FrameBuffer) -> FrameSetup {
        let height = fb.height() as f32;
        self.frontier.clear();
        self.frontier.resize(fb.width(), height);

        let v_scale = height / ELEVATION_DIVISOR;
        let mut eye = (camera.height() * v_scale).trunc();
        if camera.attach_terrain() {
            let under = camera.pos() * MAP_SCALE;
            let ground = self.terrain.elevation(under.x, under.y) as f32;
            eye += (ground * v_scale).trunc();
        }

        FrameSetup {
            fov: FovProjector::new(camera),
            width: fb.width(),
            v_scale,
            eye,
        }
    }

    /// Project and fill one depth slice at normalised depth `t`.
    fn draw_slice(
        &mut self,
        camera: &CameraState,
        setup: &FrameSetup,
        t: f32,
        fb: &mut FrameBuffer,
    ) {
        let z = slice_depth(t, camera.distance());
        let seg = setup.fov.segment(z);

        let stride = camera.fidelity();
        let step = (seg.right - seg.left) / setup.width as f32 * stride as f32;
        let mut cursor = seg.left + camera.pos();

        let scale = HEIGHT_SCALE / z;
        let horizon = camera.horizon() as f32;

        for col in (0..setup.width).step_by(stride as usize) {
            let tex = cursor * MAP_SCALE;
            let ground = (self.terrain.elevation(tex.x, tex.y) as f32 * setup.v_scale).trunc();
            let hgt = (setup.eye - ground) * scale + horizon;
            let colour = self.terrain.color(tex.x, tex.y);

            let prev = self.frontier[col];
            if hgt < prev {
                self.frontier[col] = hgt;
                draw_vert_line(fb, col, stride, hgt, prev, colour);
            }

            cursor += step;
        }
    }
}

/// Fill rows `[hgt, prev)` of `stride` adjacent columns starting at `col`.
#[inline]
fn draw_vert_line(
    fb: &mut FrameBuffer,
    col: usize,
    stride: u32,
    hgt: f32,
    prev: f32,
    colour: Rgb,
) {
    // `as` saturates, so huge foreground heights are safe here
    fb.fill_span(col as i32, stride, hgt as i32, prev.ceil() as i32, colour);
}

impl<T: TerrainSource> Layer for VoxelRenderer<T> {
    fn name(&self) -> &str {
        "voxel"
    }

    fn draw_into(&mut self, camera: &CameraState, fb: &mut FrameBuffer) {
        self.render_frame(camera, fb);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
