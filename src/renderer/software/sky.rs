use crate::{
    renderer::{FrameBuffer, Layer},
    world::{CameraState, Texture, TextureError},
};

/// Static background: a window of the sky texture stretched over the whole
/// frame with nearest-neighbour sampling.  Drawn before the terrain, which
/// then covers everything below the silhouette.
pub struct SkyLayer {
    texture: Texture,
    offset: (i64, i64),
    /// Source window size in texels; the full texture unless narrowed.
    window: (usize, usize),
}

impl SkyLayer {
    pub fn new(texture: Texture) -> Result<Self, TextureError> {
        texture.validate()?;
        let window = (texture.w, texture.h);
        Ok(Self {
            texture,
            offset: (0, 0),
            window,
        })
    }

    /// Shift the sampled window; the texture wraps.
    pub fn translate(mut self, x: i64, y: i64) -> Self {
        self.offset = (x, y);
        self
    }

    /// Sample only a `w × h` window of the texture (zero sizes become 1).
    pub fn with_window(mut self, w: usize, h: usize) -> Self {
        self.window = (w.max(1), h.max(1));
        self
    }
}

impl Layer for SkyLayer {
    fn name(&self) -> &str {
        "sky"
    }

    fn draw_into(&mut self, _camera: &CameraState, fb: &mut FrameBuffer) {
        let (w, h) = (fb.width(), fb.height());
        if w == 0 || h == 0 {
            return;
        }
        let (win_w, win_h) = self.window;
        for y in 0..h {
            let v = self.offset.1 + (y * win_h / h) as i64;
            for x in 0..w {
                let u = self.offset.0 + (x * win_w / w) as i64;
                fb.set_point(x as i32, y as i32, self.texture.texel(u, v));
            }
        }
    }
}
