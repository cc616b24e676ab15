// src/config.rs
use crate::color::Rgb;
use crate::constants::{
    COLOR_PALETTE, CURSOR_COLOR, DEFAULT_BG, DEFAULT_FG, DEFAULT_FONT, DEFAULT_OPACITY,
    SCROLLBACK_LINES, WORD_CHARS,
};
use crate::error::{TerminalError, TerminalResult};

pub const ENV_FONT: &str = "HUGOTERM_FONT";
pub const ENV_OPACITY: &str = "HUGOTERM_OPACITY";
pub const ENV_SCROLLBACK: &str = "HUGOTERM_SCROLLBACK";

#[derive(Clone, Debug, PartialEq)]
pub struct TerminalConfig {
    /// Pango font description string, e.g. `"Monospace 10"`.
    pub font: String,
    pub word_chars: String,
    pub scrollback_lines: i64,
    pub scroll_on_output: bool,
    pub scroll_on_keystroke: bool,
    /// Background alpha, 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    pub default_fg: Rgb,
    pub default_bg: Rgb,
    pub cursor_color: Rgb,
    pub palette: [Rgb; 16],
    pub bold_is_bright: bool,
    pub audible_bell: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            word_chars: WORD_CHARS.to_string(),
            scrollback_lines: SCROLLBACK_LINES,
            scroll_on_output: false,
            scroll_on_keystroke: true,
            opacity: DEFAULT_OPACITY,
            default_fg: DEFAULT_FG,
            default_bg: DEFAULT_BG,
            cursor_color: CURSOR_COLOR,
            palette: COLOR_PALETTE,
            bold_is_bright: true,
            audible_bell: false,
        }
    }
}

impl TerminalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `HUGOTERM_*` overrides from the process environment.
    pub fn from_env() -> TerminalResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`. Unset variables keep the
    /// current value; malformed ones are rejected.
    pub fn with_overrides<F>(mut self, lookup: F) -> TerminalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(font) = lookup(ENV_FONT) {
            if font.trim().is_empty() {
                return Err(TerminalError::Configuration { field: ENV_FONT, value: font });
            }
            self.font = font;
        }

        if let Some(raw) = lookup(ENV_OPACITY) {
            let opacity: f64 = raw.trim().parse().map_err(|_| TerminalError::Configuration {
                field: ENV_OPACITY,
                value: raw.clone(),
            })?;
            if !(0.0..=1.0).contains(&opacity) {
                return Err(TerminalError::Configuration { field: ENV_OPACITY, value: raw });
            }
            self.opacity = opacity;
        }

        if let Some(raw) = lookup(ENV_SCROLLBACK) {
            let lines: i64 = raw.trim().parse().map_err(|_| TerminalError::Configuration {
                field: ENV_SCROLLBACK,
                value: raw.clone(),
            })?;
            // VTE treats -1 as unlimited; anything lower is meaningless.
            if lines < -1 {
                return Err(TerminalError::Configuration { field: ENV_SCROLLBACK, value: raw });
            }
            self.scrollback_lines = lines;
        }

        Ok(self)
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = font.to_string();
        self
    }

    pub fn with_word_chars(mut self, chars: &str) -> Self {
        self.word_chars = chars.to_string();
        self
    }

    pub fn with_scrollback_lines(mut self, lines: i64) -> Self {
        self.scrollback_lines = lines;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_colors(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.default_fg = fg;
        self.default_bg = bg;
        self
    }

    /// True if `c` belongs to a word: alphanumerics plus the configured
    /// punctuation.
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.word_chars.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.font, DEFAULT_FONT);
        assert_eq!(config.scrollback_lines, 0);
        assert!(!config.scroll_on_output);
        assert!(config.scroll_on_keystroke);
        assert!(!config.audible_bell);
        assert_eq!(config.palette[1], Rgb::from_hex(0xd36265));
    }

    #[test]
    fn test_builder() {
        let config = TerminalConfig::new()
            .with_font("Fira Code 12")
            .with_opacity(1.7)
            .with_scrollback_lines(500);
        assert_eq!(config.font, "Fira Code 12");
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.scrollback_lines, 500);
    }

    #[test]
    fn test_overrides_applied() {
        let config = TerminalConfig::default()
            .with_overrides(lookup(&[
                (ENV_FONT, "DejaVu Sans Mono 9"),
                (ENV_OPACITY, "0.8"),
                (ENV_SCROLLBACK, "-1"),
            ]))
            .unwrap();
        assert_eq!(config.font, "DejaVu Sans Mono 9");
        assert_eq!(config.opacity, 0.8);
        assert_eq!(config.scrollback_lines, -1);
    }

    #[test]
    fn test_overrides_absent_keep_defaults() {
        let config = TerminalConfig::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn test_overrides_rejected() {
        let err = TerminalConfig::default()
            .with_overrides(lookup(&[(ENV_OPACITY, "opaque")]))
            .unwrap_err();
        assert!(matches!(err, TerminalError::Configuration { field: ENV_OPACITY, .. }));

        assert!(TerminalConfig::default()
            .with_overrides(lookup(&[(ENV_OPACITY, "1.5")]))
            .is_err());
        assert!(TerminalConfig::default()
            .with_overrides(lookup(&[(ENV_SCROLLBACK, "-2")]))
            .is_err());
        assert!(TerminalConfig::default()
            .with_overrides(lookup(&[(ENV_FONT, "  ")]))
            .is_err());
    }

    #[test]
    fn test_word_chars() {
        let config = TerminalConfig::default();
        assert!(config.is_word_char('a'));
        assert!(config.is_word_char('9'));
        assert!(config.is_word_char('/'));
        assert!(config.is_word_char('~'));
        assert!(!config.is_word_char(' '));
        assert!(!config.is_word_char('('));
        assert!(!config.is_word_char('"'));
    }
}
