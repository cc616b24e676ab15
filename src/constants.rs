// src/constants.rs
use crate::color::Rgb;

pub const APP_ID: &str = "com.example.hugoterm";
pub const PACKAGE_NAME: &str = "hugoterm";

// Display constants
pub const DEFAULT_FONT: &str = "Monospace 10";
pub const DEFAULT_OPACITY: f64 = 0.95;
pub const SCROLLBACK_LINES: i64 = 0;

/// Punctuation that counts as part of a word for double-click selection and
/// word expansion, on top of alphanumerics.
pub const WORD_CHARS: &str = "-,./?%&#:_=+@~";

/// Font size step for Ctrl+plus / Ctrl+minus, in points.
pub const FONT_STEP: i32 = 1;

/// Child program used when neither the command line nor $SHELL names one.
pub const FALLBACK_SHELL: &str = "/bin/sh";

// Color constants
pub const DEFAULT_FG: Rgb = Rgb::from_hex(0xffffff);
pub const DEFAULT_BG: Rgb = Rgb::from_hex(0x000000);
pub const CURSOR_COLOR: Rgb = Rgb::from_hex(0x008800);

// 16-color ANSI palette
pub const COLOR_PALETTE: [Rgb; 16] = [
    // Basic 8 colors
    Rgb::from_hex(0x111111), // Black
    Rgb::from_hex(0xd36265), // Red
    Rgb::from_hex(0xaece91), // Green
    Rgb::from_hex(0xe7e18c), // Yellow
    Rgb::from_hex(0x5297cf), // Blue
    Rgb::from_hex(0x963c59), // Magenta
    Rgb::from_hex(0x5e7175), // Cyan
    Rgb::from_hex(0xbebebe), // White
    // Bright colors
    Rgb::from_hex(0x666666), // Bright Black (Gray)
    Rgb::from_hex(0xef8171), // Bright Red
    Rgb::from_hex(0xcfefb3), // Bright Green
    Rgb::from_hex(0xfff796), // Bright Yellow
    Rgb::from_hex(0x74b8ef), // Bright Blue
    Rgb::from_hex(0xb85e7b), // Bright Magenta
    Rgb::from_hex(0xa3babf), // Bright Cyan
    Rgb::from_hex(0xffffff), // Bright White
];
