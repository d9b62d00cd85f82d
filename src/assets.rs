//! Image files → textures.
//!
//! Decoding is delegated to the `image` crate; everything is converted to
//! 8-bit RGB.  Height maps are read from the red channel, so a grayscale
//! PNG works as-is.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::{
    color::Rgb,
    world::{Raster, Terrain, Texture, TextureError},
};

#[derive(Error, Debug)]
pub enum AssetError {
    /// File missing, unreadable, or not a supported image format.
    #[error("cannot decode `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Decoded fine, but unusable as terrain.
    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Convert an already-decoded image into a [`Texture`].
pub fn texture_from_image<S: Into<String>>(
    name: S,
    img: &image::DynamicImage,
) -> Result<Texture, TextureError> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();
    Texture::new(name, w as usize, h as usize, pixels)
}

/// Decode any supported image file.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture, AssetError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    let tex = texture_from_image(path.display().to_string(), &img)?;
    info!("loaded {} ({}×{})", tex.name, tex.w, tex.h);
    Ok(tex)
}

/// Load and pair the colour and height maps.
pub fn load_terrain<P: AsRef<Path>, Q: AsRef<Path>>(
    color_map: P,
    height_map: Q,
) -> Result<Terrain, AssetError> {
    let color = Raster::new(load_texture(color_map)?)?;
    let elevation = Raster::new(load_texture(height_map)?)?;
    Ok(Terrain::new(color, elevation)?)
}
