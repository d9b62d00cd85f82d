use crate::renderer::Rgba;

/// 8-bit RGB triple as stored in terrain and sky textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level with all three channels set to `v` (used for heightmaps).
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Multiply every channel by `blend`, truncating and clamping to 0‥255.
    #[inline]
    pub fn scaled(self, blend: f32) -> Self {
        let ch = |c: u8| (c as f32 * blend).clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }

    /// Pack into the frame-buffer format (0xAARRGGBB, alpha always opaque).
    #[inline]
    pub const fn to_argb(self) -> Rgba {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`Rgb::to_argb`]; the alpha byte is dropped.
    #[inline]
    pub const fn from_argb(px: Rgba) -> Self {
        Self {
            r: (px >> 16) as u8,
            g: (px >> 8) as u8,
            b: px as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_is_opaque_and_reversible() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_argb(), 0xFF_12_34_56);
        assert_eq!(Rgb::from_argb(c.to_argb()), c);
    }

    #[test]
    fn scaled_clamps_both_ends() {
        let c = Rgb::new(200, 100, 0);
        assert_eq!(c.scaled(2.0), Rgb::new(255, 200, 0));
        assert_eq!(c.scaled(-1.0), Rgb::BLACK);
        // truncation, not rounding
        assert_eq!(Rgb::new(3, 3, 3).scaled(0.5), Rgb::new(1, 1, 1));
    }
}
