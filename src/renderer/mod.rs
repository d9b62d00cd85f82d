//! Rendering abstraction layer.
//!
//! *Nothing outside this module writes pixels.*  A frame is the ordered
//! composition of independent [`Layer`]s (sky first, terrain on top), each
//! drawing into the shared [`FrameBuffer`].  The finished buffer is then
//! loaned to the presenter via [`FrameBuffer::present`].
//!
//! * Layers never know about each other; ordering lives in [`RenderList`].
//! * The camera is borrowed immutably for the whole pass, so every layer
//!   sees the same snapshot.

use log::trace;

use crate::world::CameraState;

/// Pixel format of the software frame-buffer (0xAARRGGBB, alpha = 0xFF).
pub type Rgba = u32;

/// Clear colour used before the first layer runs.
pub const CLEAR_COLOUR: Rgba = 0xFF_20_20_20;

/// Anything that can paint itself into a frame.
pub trait Layer {
    /// Short name for log output.
    fn name(&self) -> &str;

    /// Draw this layer for `camera` on top of whatever is already in `fb`.
    fn draw_into(&mut self, camera: &CameraState, fb: &mut FrameBuffer);
}

/// Ordered stack of layers, drawn back to front.
#[derive(Default)]
pub struct RenderList {
    layers: Vec<Box<dyn Layer>>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; later layers draw over earlier ones.
    pub fn push<L: Layer + 'static>(&mut self, layer: L) -> &mut Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Clear `fb` and run every layer once, in order.
    pub fn render(&mut self, camera: &CameraState, fb: &mut FrameBuffer) {
        fb.clear(CLEAR_COLOUR);
        for layer in &mut self.layers {
            trace!("drawing layer {}", layer.name());
            layer.draw_into(camera, fb);
        }
    }
}

mod frame;
pub mod software;

pub use frame::FrameBuffer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// Paints one fixed pixel and records the call order.
    struct Dot {
        x: i32,
        colour: Rgb,
    }

    impl Layer for Dot {
        fn name(&self) -> &str {
            "dot"
        }
        fn draw_into(&mut self, _camera: &CameraState, fb: &mut FrameBuffer) {
            fb.set_point(self.x, 0, self.colour);
        }
    }

    #[test]
    fn later_layers_draw_over_earlier_ones() {
        let mut list = RenderList::new();
        list.push(Dot {
            x: 0,
            colour: Rgb::new(255, 0, 0),
        })
        .push(Dot {
            x: 0,
            colour: Rgb::new(0, 0, 255),
        });
        assert_eq!(list.len(), 2);

        let mut fb = FrameBuffer::new(2, 1);
        list.render(&CameraState::default(), &mut fb);
        assert_eq!(fb.get_point(0, 0), Rgb::new(0, 0, 255));
        assert_eq!(fb.pixels()[1], CLEAR_COLOUR);
    }
}
