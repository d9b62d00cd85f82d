// Decoded, format-agnostic pixel grids.  The asset loader fills them; the
// terrain sampler and the sky layer read them.

use crate::color::Rgb;

/// CPU-side RGB image in row-major order, top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgb>,
}

/// Things that can go wrong when building textures and rasters.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Zero width or height.
    #[error("texture `{0}` has no pixels")]
    Empty(String),

    /// Pixel vector does not hold `w * h` entries.
    #[error("texture `{name}` expects {expected} pixels, got {got}")]
    BadLength {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Terrain rasters must be square.
    #[error("raster `{name}` is {w}×{h}, expected a square")]
    NotSquare { name: String, w: usize, h: usize },

    /// Colour and elevation rasters disagree in size.
    #[error("colour map is {color}×{color} but height map is {elevation}×{elevation}")]
    SizeMismatch { color: usize, elevation: usize },
}

impl Texture {
    /// Build a texture, checking that `pixels` really is `w × h`.
    pub fn new<S: Into<String>>(
        name: S,
        w: usize,
        h: usize,
        pixels: Vec<Rgb>,
    ) -> Result<Self, TextureError> {
        let tex = Self {
            name: name.into(),
            w,
            h,
            pixels,
        };
        tex.validate()?;
        Ok(tex)
    }

    /// Check the shape invariants `texel` relies on: non-empty and exactly
    /// `w × h` pixels.  Fields are public, so consumers re-check on entry.
    pub fn validate(&self) -> Result<(), TextureError> {
        if self.w == 0 || self.h == 0 {
            return Err(TextureError::Empty(self.name.clone()));
        }
        if self.pixels.len() != self.w * self.h {
            return Err(TextureError::BadLength {
                name: self.name.clone(),
                expected: self.w * self.h,
                got: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Single-colour texture, handy for flat test terrain.
    pub fn solid<S: Into<String>>(name: S, w: usize, h: usize, colour: Rgb) -> Self {
        Self {
            name: name.into(),
            w,
            h,
            pixels: vec![colour; w * h],
        }
    }

    /// Texel at integer coordinates, wrapped on both axes.
    #[inline]
    pub fn texel(&self, x: i64, y: i64) -> Rgb {
        let u = x.rem_euclid(self.w as i64) as usize;
        let v = y.rem_euclid(self.h as i64) as usize;
        self.pixels[v * self.w + u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_pixel_count() {
        let err = Texture::new("SHORT", 2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            TextureError::BadLength {
                name: "SHORT".into(),
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            Texture::new("NONE", 0, 4, vec![]).unwrap_err(),
            TextureError::Empty("NONE".into())
        );
    }

    #[test]
    fn texel_wraps_negative_and_large() {
        let pixels = (0..64u8).map(Rgb::gray).collect();
        let tex = Texture::new("RAMP", 8, 8, pixels).unwrap();
        assert_eq!(tex.texel(-1, 0), tex.texel(7, 0));
        assert_eq!(tex.texel(8, 9), tex.texel(0, 1));
        assert_eq!(tex.texel(-17, -9), tex.texel(7, 7));
    }
}
