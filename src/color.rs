// src/color.rs
use gtk4::gdk;

/// 24-bit color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(u32);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0xff_ffff)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_hex)
    }

    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn to_rgba(self, alpha: f64) -> gdk::RGBA {
        gdk::RGBA::new(
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            alpha.clamp(0.0, 1.0) as f32,
        )
    }

    pub fn to_opaque_rgba(self) -> gdk::RGBA {
        self.to_rgba(1.0)
    }
}
