use glam::Vec2;

/// Map units travelled per frame while a move key is held.
pub const MOVE_STEP: f32 = 6.9;
/// Radians turned per frame while a turn key is held.
pub const TURN_STEP: f32 = 0.05;

const HEIGHT_STEP: f32 = 5.0;
const HORIZON_STEP: i32 = 5;
const FOV_STEP: f32 = 1.0;
const DISTANCE_STEP: f32 = 50.0;
const DETAIL_STEP: u32 = 24;
/// Detail is only lowered while it stays above this.
const DETAIL_FLOOR: u32 = 25;

/// One atomic change of the camera, produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    HeightUp,
    HeightDown,
    HorizonUp,
    HorizonDown,
    FovUp,
    FovDown,
    DistanceUp,
    DistanceDown,
    /// Wider column stride: coarser, faster.
    FidelityUp,
    FidelityDown,
    DetailUp,
    DetailDown,
    ToggleAttach,
}

/// Start-up values for a [`CameraState`]; every field may be overridden
/// from the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub angle: f32,
    pub horizon: i32,
    pub distance: f32,
    pub detail: u32,
    pub fidelity: u32,
    pub fov: f32,
    pub attach_terrain: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x: 445.0,
            y: 400.0,
            height: 250.0,
            angle: 0.0,
            horizon: 10,
            distance: 1800.0,
            detail: 800,
            fidelity: 2,
            fov: 0.0,
            attach_terrain: false,
        }
    }
}

/// Rejected start-up parameters.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("detail must be at least 1 depth slice")]
    ZeroDetail,
    #[error("fidelity must be at least 1 pixel per column")]
    ZeroFidelity,
    #[error("view distance must be positive and finite, got {0}")]
    BadDistance(f32),
}

/// Viewer position, heading and render parameters.
///
/// * Heading 0 looks towards −Y on the map; positive angles turn left.
/// * `height` is eye height above the terrain baseline, or above the ground
///   under the camera when `attach_terrain` is set.
/// * `detail ≥ 1`, `fidelity ≥ 1` and `distance > 0` hold for the whole
///   lifetime of the value: they are checked in [`CameraState::new`] and
///   clamped by every [`Command`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pos: Vec2,
    height: f32,
    angle: f32,
    horizon: i32,
    distance: f32,
    detail: u32,
    fidelity: u32,
    fov: f32,
    attach_terrain: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        let c = CameraConfig::default();
        Self {
            pos: Vec2::new(c.x, c.y),
            height: c.height,
            angle: c.angle,
            horizon: c.horizon,
            distance: c.distance,
            detail: c.detail,
            fidelity: c.fidelity,
            fov: c.fov,
            attach_terrain: c.attach_terrain,
        }
    }
}

impl CameraState {
    pub fn new(cfg: CameraConfig) -> Result<Self, ConfigError> {
        if cfg.detail == 0 {
            return Err(ConfigError::ZeroDetail);
        }
        if cfg.fidelity == 0 {
            return Err(ConfigError::ZeroFidelity);
        }
        if !(cfg.distance.is_finite() && cfg.distance > 0.0) {
            return Err(ConfigError::BadDistance(cfg.distance));
        }
        Ok(Self {
            pos: Vec2::new(cfg.x, cfg.y),
            height: cfg.height,
            angle: cfg.angle,
            horizon: cfg.horizon,
            distance: cfg.distance,
            detail: cfg.detail,
            fidelity: cfg.fidelity,
            fov: cfg.fov,
            attach_terrain: cfg.attach_terrain,
        })
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    /// Map-space position (x, y).
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
    /// Heading in radians, never normalised.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }
    #[inline]
    pub fn horizon(&self) -> i32 {
        self.horizon
    }
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }
    /// Depth slices per frame, always ≥ 1.
    #[inline]
    pub fn detail(&self) -> u32 {
        self.detail
    }
    /// Screen pixels per sampled column, always ≥ 1.
    #[inline]
    pub fn fidelity(&self) -> u32 {
        self.fidelity
    }
    /// Half-spread of the view in degrees.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }
    #[inline]
    pub fn attach_terrain(&self) -> bool {
        self.attach_terrain
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Walk `step` map units along the heading.
    pub fn move_forward(&mut self, step: f32) {
        let (s, c) = self.angle.sin_cos();
        self.pos.x -= s * step;
        self.pos.y -= c * step;
    }

    pub fn move_backward(&mut self, step: f32) {
        self.move_forward(-step);
    }

    /// Rotate by `delta` radians (positive = turn left).
    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Apply one input command.  Never fails; out-of-range requests clamp.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::MoveForward => self.move_forward(MOVE_STEP),
            Command::MoveBackward => self.move_backward(MOVE_STEP),
            Command::TurnLeft => self.turn(TURN_STEP),
            Command::TurnRight => self.turn(-TURN_STEP),
            Command::HeightUp => self.height += HEIGHT_STEP,
            Command::HeightDown => self.height -= HEIGHT_STEP,
            Command::HorizonUp => self.horizon = self.horizon.saturating_add(HORIZON_STEP),
            Command::HorizonDown => self.horizon = self.horizon.saturating_sub(HORIZON_STEP),
            Command::FovUp => self.fov += FOV_STEP,
            Command::FovDown => self.fov -= FOV_STEP,
            Command::DistanceUp => self.distance += DISTANCE_STEP,
            Command::DistanceDown => {
                self.distance = (self.distance - DISTANCE_STEP).max(DISTANCE_STEP)
            }
            Command::FidelityUp => self.fidelity = self.fidelity.saturating_add(1),
            Command::FidelityDown => {
                if self.fidelity > 1 {
                    self.fidelity -= 1;
                }
            }
            Command::DetailUp => self.detail = self.detail.saturating_add(DETAIL_STEP),
            Command::DetailDown => {
                if self.detail > DETAIL_FLOOR {
                    self.detail -= DETAIL_STEP;
                }
            }
            Command::ToggleAttach => self.attach_terrain = !self.attach_terrain,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn cam_at(x: f32, y: f32, angle: f32) -> CameraState {
        CameraState::new(CameraConfig {
            x,
            y,
            angle,
            ..CameraConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn forward_at_zero_heading_decreases_y() {
        let mut cam = cam_at(10.0, 10.0, 0.0);
        cam.move_forward(2.0);
        assert!((cam.pos() - Vec2::new(10.0, 8.0)).length() < 1e-5);
    }

    #[test]
    fn forward_after_quarter_turn_decreases_x() {
        let mut cam = cam_at(0.0, 0.0, 0.0);
        cam.turn(FRAC_PI_2);
        cam.move_forward(3.0);
        assert!((cam.pos() - Vec2::new(-3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn backward_undoes_forward() {
        let mut cam = cam_at(445.0, 400.0, 0.7);
        cam.apply(Command::MoveForward);
        cam.apply(Command::MoveBackward);
        assert!((cam.pos() - Vec2::new(445.0, 400.0)).length() < 1e-3);
    }

    #[test]
    fn turn_is_not_normalised() {
        let mut cam = cam_at(0.0, 0.0, 0.0);
        for _ in 0..200 {
            cam.apply(Command::TurnLeft);
        }
        assert!((cam.angle() - 200.0 * TURN_STEP).abs() < 1e-3);
    }

    #[test]
    fn fidelity_never_drops_below_one() {
        let mut cam = CameraState::new(CameraConfig {
            fidelity: 1,
            ..CameraConfig::default()
        })
        .unwrap();
        cam.apply(Command::FidelityDown);
        assert_eq!(cam.fidelity(), 1);
        cam.apply(Command::FidelityUp);
        cam.apply(Command::FidelityUp);
        cam.apply(Command::FidelityDown);
        assert_eq!(cam.fidelity(), 2);
    }

    #[test]
    fn detail_stays_positive() {
        let mut cam = CameraState::new(CameraConfig {
            detail: 50,
            ..CameraConfig::default()
        })
        .unwrap();
        for _ in 0..10 {
            cam.apply(Command::DetailDown);
        }
        // 50 → 26 → 2, then stuck
        assert_eq!(cam.detail(), 2);
        cam.apply(Command::DetailUp);
        assert_eq!(cam.detail(), 26);
    }

    #[test]
    fn increments_saturate_at_type_limits() {
        let mut cam = CameraState::new(CameraConfig {
            detail: u32::MAX - 1,
            fidelity: u32::MAX,
            horizon: i32::MAX,
            ..CameraConfig::default()
        })
        .unwrap();
        cam.apply(Command::DetailUp);
        cam.apply(Command::FidelityUp);
        cam.apply(Command::HorizonUp);
        assert_eq!(cam.detail(), u32::MAX);
        assert_eq!(cam.fidelity(), u32::MAX);
        assert_eq!(cam.horizon(), i32::MAX);

        let mut low = CameraState::new(CameraConfig {
            horizon: i32::MIN + 1,
            ..CameraConfig::default()
        })
        .unwrap();
        low.apply(Command::HorizonDown);
        assert_eq!(low.horizon(), i32::MIN);
    }

    #[test]
    fn distance_stays_positive() {
        let mut cam = CameraState::default();
        for _ in 0..100 {
            cam.apply(Command::DistanceDown);
        }
        assert!(cam.distance() > 0.0);
    }

    #[test]
    fn simple_adjustments() {
        let mut cam = CameraState::default();
        cam.apply(Command::HeightUp);
        cam.apply(Command::HorizonDown);
        cam.apply(Command::FovUp);
        cam.apply(Command::DistanceUp);
        cam.apply(Command::ToggleAttach);
        assert_eq!(cam.height(), 255.0);
        assert_eq!(cam.horizon(), 5);
        assert_eq!(cam.fov(), 1.0);
        assert_eq!(cam.distance(), 1850.0);
        assert!(cam.attach_terrain());
    }

    #[test]
    fn invalid_config_rejected() {
        let zero_detail = CameraConfig {
            detail: 0,
            ..CameraConfig::default()
        };
        assert_eq!(CameraState::new(zero_detail), Err(ConfigError::ZeroDetail));

        let zero_fidelity = CameraConfig {
            fidelity: 0,
            ..CameraConfig::default()
        };
        assert_eq!(CameraState::new(zero_fidelity), Err(ConfigError::ZeroFidelity));

        let bad_distance = CameraConfig {
            distance: -1.0,
            ..CameraConfig::default()
        };
        assert_eq!(
            CameraState::new(bad_distance),
            Err(ConfigError::BadDistance(-1.0))
        );
    }

    #[test]
    fn default_matches_default_config() {
        assert_eq!(
            CameraState::new(CameraConfig::default()).unwrap(),
            CameraState::default()
        );
    }
}
