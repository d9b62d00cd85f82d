//! Software frame-buffer shared by all layers.
//!
//! Pixels are packed **0xAARRGGBB** (what `minifb` consumes directly) in
//! row-major order with a top-left origin.  Alpha is always `0xFF`.

use super::Rgba;
use crate::color::Rgb;

/// Raised when a surface snapshot does not match the buffer size.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("surface has {got} pixels, frame buffer expects {expected}")]
pub struct SizeMismatch {
    pub expected: usize,
    pub got: usize,
}

#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![super::CLEAR_COLOUR; width * height],
            width,
            height,
        }
    }

    /// (Re)allocate only if the resolution changed.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.resize(width * height, super::CLEAR_COLOUR);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn clear(&mut self, colour: Rgba) {
        self.pixels.fill(colour);
    }

    /*──────────────────────── point access ───────────────────────────*/

    /// Write one opaque pixel; coordinates outside the buffer are ignored.
    #[inline]
    pub fn set_point(&mut self, x: i32, y: i32, colour: Rgb) {
        self.set_point_blend(x, y, colour, 1.0);
    }

    /// Write `colour` with every channel scaled by `blend` (clamped to 255).
    pub fn set_point_blend(&mut self, x: i32, y: i32, colour: Rgb, blend: f32) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = colour.scaled(blend).to_argb();
        }
    }

    /// Read back a pixel; out-of-range coordinates wrap around.
    pub fn get_point(&self, x: i32, y: i32) -> Rgb {
        if self.pixels.is_empty() {
            return Rgb::BLACK;
        }
        let u = x.rem_euclid(self.width as i32) as usize;
        let v = y.rem_euclid(self.height as i32) as usize;
        Rgb::from_argb(self.pixels[v * self.width + u])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_x = (0..self.width as i32).contains(&x);
        let in_y = (0..self.height as i32).contains(&y);
        (in_x && in_y).then(|| y as usize * self.width + x as usize)
    }

    /*──────────────────────── span fill ──────────────────────────────*/

    /// Fill rows `y0..y1` of columns `x..x + span_w` with one colour,
    /// clipped to the buffer.
    pub fn fill_span(&mut self, x: i32, span_w: u32, y0: i32, y1: i32, colour: Rgb) {
        let x0 = x.max(0) as usize;
        let x1 = (x as i64 + span_w as i64).clamp(0, self.width as i64) as usize;
        let y0 = y0.max(0) as usize;
        let y1 = y1.clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = colour.to_argb();
        for row in y0..y1 {
            let base = row * self.width;
            self.pixels[base + x0..base + x1].fill(px);
        }
    }

    /*──────────────────────── surface exchange ───────────────────────*/

    /// Copy of the current contents, e.g. to restore them later.
    pub fn snapshot(&self) -> Vec<Rgba> {
        self.pixels.clone()
    }

    /// Reload the buffer from a surface's current contents.
    pub fn refresh_from(&mut self, surface: &[Rgba]) -> Result<(), SizeMismatch> {
        if surface.len() != self.pixels.len() {
            return Err(SizeMismatch {
                expected: self.pixels.len(),
                got: surface.len(),
            });
        }
        self.pixels.copy_from_slice(surface);
        Ok(())
    }

    /// Finish the frame and **loan** the pixels to `submit`.
    ///
    /// The window caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    pub fn present<F, R>(&self, submit: F) -> R
    where
        F: FnOnce(&[Rgba], usize, usize) -> R,
    {
        submit(&self.pixels, self.width, self.height)
    }

    /// Row-major RGBA bytes, four per pixel, alpha 255.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &px in &self.pixels {
            let c = Rgb::from_argb(px);
            out.extend_from_slice(&[c.r, c.g, c.b, 0xFF]);
        }
        out
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
