use glam::Vec2;

use crate::world::CameraState;

/// Degrees → radians, shared by every FOV computation.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Frustum edges at one depth, relative to the camera position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub left: Vec2,
    pub right: Vec2,
}

/// Sines and cosines of the two frustum-edge headings, computed once per
/// frame and reused for every depth slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FovProjector {
    sin_l: f32,
    cos_l: f32,
    sin_r: f32,
    cos_r: f32,
}

impl FovProjector {
    /// Edge headings are `angle ± fov`.
    pub fn new(camera: &CameraState) -> Self {
        let spread = camera.fov() * DEG_TO_RAD;
        let (sin_l, cos_l) = (camera.angle() + spread).sin_cos();
        let (sin_r, cos_r) = (camera.angle() - spread).sin_cos();
        Self {
            sin_l,
            cos_l,
            sin_r,
            cos_r,
        }
    }

    /// Left and right frustum edges at depth `z`.
    ///
    /// This is not a plain rotation of `(±z, −z)`: the mixed sin/cos terms
    /// give the renderer its characteristic shear, and the output must keep
    /// exactly this shape.
    #[inline]
    pub fn segment(&self, z: f32) -> Segment {
        Segment {
            left: Vec2::new(
                -self.cos_l * z - self.sin_l * z,
                self.sin_l * z - self.cos_l * z,
            ),
            right: Vec2::new(
                self.cos_r * z - self.sin_r * z,
                -self.sin_r * z - self.cos_r * z,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::CameraConfig;

    fn camera(angle: f32, fov: f32) -> CameraState {
        CameraState::new(CameraConfig {
            angle,
            fov,
            ..CameraConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn zero_heading_edges() {
        let seg = FovProjector::new(&camera(0.0, 0.0)).segment(10.0);
        assert!((seg.left - Vec2::new(-10.0, -10.0)).length() < 1e-5);
        assert!((seg.right - Vec2::new(10.0, -10.0)).length() < 1e-5);
    }

    #[test]
    fn zero_fov_offsets_are_antiparallel() {
        for &angle in &[0.0, 0.4, 2.0, -1.3] {
            let seg = FovProjector::new(&camera(angle, 0.0)).segment(37.0);
            let centre = (seg.left + seg.right) * 0.5;
            let off_l = seg.left - centre;
            let off_r = seg.right - centre;
            assert!((off_l.length() - off_r.length()).abs() < 1e-3);
            assert!((off_l + off_r).length() < 1e-3);
            assert!(off_l.length() > 1.0);

            // the central ray points along the walking direction
            let forward = Vec2::new(-angle.sin(), -angle.cos());
            assert!((centre.normalize() - forward).length() < 1e-4);
        }
    }

    #[test]
    fn magnitude_scales_with_depth() {
        let fov = FovProjector::new(&camera(0.9, 12.0));
        let near = fov.segment(2.0);
        let far = fov.segment(6.0);
        assert!((far.left - near.left * 3.0).length() < 1e-4);
        assert!((far.right - near.right * 3.0).length() < 1e-4);
    }

    #[test]
    fn widening_fov_widens_segment() {
        let narrow = FovProjector::new(&camera(0.0, 0.0)).segment(10.0);
        let wide = FovProjector::new(&camera(0.0, 10.0)).segment(10.0);
        let w0 = (narrow.right - narrow.left).length();
        let w1 = (wide.right - wide.left).length();
        assert!(w1 > w0);
    }
}
