//! Colors used by the particle field

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Attach an alpha value (clamped to 0.0-1.0)
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Source-over blend of `top` onto `self` with the given coverage
    pub fn blend(self, top: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| -> u8 {
            (under as f32 + (over as f32 - under as f32) * a).round() as u8
        };
        Rgb::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }
}

/// RGB color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

/// Drift and trail particle palette
pub const PALETTE: [Rgb; 5] = [
    Rgb::from_hex(0x8b5cf6), // violet
    Rgb::from_hex(0x06b6d4), // cyan
    Rgb::from_hex(0x10b981), // emerald
    Rgb::from_hex(0xa78bfa), // lavender
    Rgb::from_hex(0x38bdf8), // sky
];

/// Constellation line stroke
pub const LINE_COLOR: Rgba = Rgba {
    rgb: Rgb::new(139, 92, 246),
    alpha: 0.1,
};
