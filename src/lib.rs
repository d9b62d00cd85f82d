//! Voxel Space terrain renderer.
//!
//! A first-person view of a height-mapped landscape produced purely from 2-D
//! raster lookups and column fills, in the style of the early-90s flight
//! games.  No meshes, no depth buffer: one occlusion value per column.

pub mod assets;
pub mod color;
pub mod config;
pub mod frame_clock;
pub mod input;
pub mod renderer;
pub mod world;
