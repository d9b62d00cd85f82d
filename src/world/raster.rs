//! Toroidal terrain sampling.
//!
//! A [`Raster`] is a square [`Texture`] addressed with real-valued map
//! coordinates.  Coordinates are floored and wrapped modulo the side length,
//! so the landscape tiles forever in every direction and a lookup can never
//! miss.

use super::texture::{Texture, TextureError};
use crate::color::Rgb;

/// Square texture with wrap-around point sampling.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    tex: Texture,
}

impl Raster {
    pub fn new(tex: Texture) -> Result<Self, TextureError> {
        tex.validate()?;
        if tex.w != tex.h {
            return Err(TextureError::NotSquare {
                name: tex.name,
                w: tex.w,
                h: tex.h,
            });
        }
        Ok(Self { tex })
    }

    /// Side length in texels.
    #[inline]
    pub fn side(&self) -> usize {
        self.tex.w
    }

    /// Colour under `(x, y)`; any finite input is valid.
    #[inline]
    pub fn sample(&self, x: f32, y: f32) -> Rgb {
        self.tex.texel(x.floor() as i64, y.floor() as i64)
    }

    /// Elevation under `(x, y)`, read from the red channel.
    #[inline]
    pub fn elevation(&self, x: f32, y: f32) -> u8 {
        self.sample(x, y).r
    }
}

/// What the voxel renderer needs from a landscape.
///
/// Coordinates are in texture space (map units already scaled down).
pub trait TerrainSource {
    fn elevation(&self, x: f32, y: f32) -> u8;
    fn color(&self, x: f32, y: f32) -> Rgb;
}

/// Co-registered colour and elevation rasters of identical size.
#[derive(Clone, Debug)]
pub struct Terrain {
    color: Raster,
    elevation: Raster,
}

impl Terrain {
    pub fn new(color: Raster, elevation: Raster) -> Result<Self, TextureError> {
        if color.side() != elevation.side() {
            return Err(TextureError::SizeMismatch {
                color: color.side(),
                elevation: elevation.side(),
            });
        }
        Ok(Self { color, elevation })
    }

    /// Side length shared by both rasters.
    pub fn side(&self) -> usize {
        self.color.side()
    }
}

impl TerrainSource for Terrain {
    #[inline]
    fn elevation(&self, x: f32, y: f32) -> u8 {
        self.elevation.elevation(x, y)
    }

    #[inline]
    fn color(&self, x: f32, y: f32) -> Rgb {
        self.color.sample(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4×4 ramp: red = x + 4·y, so every texel is distinct.
    fn ramp() -> Raster {
        let pixels = (0..16u8).map(|i| Rgb::new(i, 255 - i, i / 2)).collect();
        Raster::new(Texture::new("RAMP", 4, 4, pixels).unwrap()).unwrap()
    }

    #[test]
    fn sample_wraps_by_side_on_both_axes() {
        let r = ramp();
        let side = r.side() as f32;
        for &(x, y) in &[(0.0, 0.0), (1.5, 2.25), (-0.5, 3.9), (7.1, -2.0), (-9.3, -13.7)] {
            let here = r.sample(x, y);
            assert_eq!(here, r.sample(x + side, y), "x+side at ({x},{y})");
            assert_eq!(here, r.sample(x, y - side), "y-side at ({x},{y})");
        }
    }

    #[test]
    fn fractional_coords_truncate_to_cell() {
        let r = ramp();
        assert_eq!(r.elevation(2.99, 1.01), 2 + 4);
        assert_eq!(r.elevation(-0.01, 0.0), 3);
        assert_eq!(r.elevation(4.0, 4.0), 0);
    }

    #[test]
    fn empty_or_short_raster_rejected() {
        let empty = Texture::solid("EMPTY", 0, 0, Rgb::BLACK);
        assert_eq!(
            Raster::new(empty).unwrap_err(),
            TextureError::Empty("EMPTY".into())
        );

        // public fields let callers break the pixel count after construction
        let mut short = Texture::solid("SHORT", 2, 2, Rgb::BLACK);
        short.pixels.pop();
        assert_eq!(
            Raster::new(short).unwrap_err(),
            TextureError::BadLength {
                name: "SHORT".into(),
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn rectangular_raster_rejected() {
        let tex = Texture::solid("WIDE", 4, 2, Rgb::BLACK);
        assert!(matches!(
            Raster::new(tex),
            Err(TextureError::NotSquare { w: 4, h: 2, .. })
        ));
    }

    #[test]
    fn terrain_requires_equal_sizes() {
        let c = Raster::new(Texture::solid("C", 4, 4, Rgb::BLACK)).unwrap();
        let e = Raster::new(Texture::solid("E", 8, 8, Rgb::gray(1))).unwrap();
        assert_eq!(
            Terrain::new(c, e).unwrap_err(),
            TextureError::SizeMismatch {
                color: 4,
                elevation: 8
            }
        );
    }

    #[test]
    fn terrain_reads_both_channels() {
        let c = Raster::new(Texture::solid("C", 2, 2, Rgb::new(9, 8, 7))).unwrap();
        let e = Raster::new(Texture::solid("E", 2, 2, Rgb::new(42, 0, 0))).unwrap();
        let t = Terrain::new(c, e).unwrap();
        assert_eq!(t.elevation(-100.0, 55.5), 42);
        assert_eq!(t.color(3.0, 3.0), Rgb::new(9, 8, 7));
        assert_eq!(t.side(), 2);
    }
}
