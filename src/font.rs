// src/font.rs
use crate::constants::FONT_STEP;
use pango::FontDescription;
use vte4::prelude::*;

/// New font size in Pango units after moving `delta` points from `current`.
/// Never goes below one point.
pub fn zoomed_size(current: i32, delta: i32) -> i32 {
    current
        .saturating_add(delta.saturating_mul(pango::SCALE))
        .max(pango::SCALE)
}

/// Grow or shrink the terminal font by `delta` steps. A zero delta re-applies
/// the current font, which makes VTE recompute cell metrics.
pub fn zoom(terminal: &vte4::Terminal, delta: i32) {
    let Some(mut descr) = terminal.font() else {
        tracing::debug!("terminal has no font yet, skipping zoom");
        return;
    };
    let current = descr.size();
    descr.set_size(zoomed_size(current, delta * FONT_STEP));
    tracing::debug!(from = current, to = descr.size(), "font size");
    terminal.set_font(Some(&descr));
}

/// Go back to the configured font.
pub fn reset(terminal: &vte4::Terminal, font: &str) {
    terminal.set_font(Some(&FontDescription::from_string(font)));
    zoom(terminal, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let ten = 10 * pango::SCALE;
        assert_eq!(zoomed_size(ten, 1), 11 * pango::SCALE);
        assert_eq!(zoomed_size(ten, -1), 9 * pango::SCALE);
        assert_eq!(zoomed_size(ten, 0), ten);
    }

    #[test]
    fn test_zoom_floor() {
        assert_eq!(zoomed_size(pango::SCALE, -1), pango::SCALE);
        assert_eq!(zoomed_size(2 * pango::SCALE, -10), pango::SCALE);
        // Unset size (0) comes back as the minimum usable size.
        assert_eq!(zoomed_size(0, 0), pango::SCALE);
    }

    #[test]
    fn test_zoom_fractional_size_kept() {
        let size = 10 * pango::SCALE + pango::SCALE / 2;
        assert_eq!(zoomed_size(size, 1), 11 * pango::SCALE + pango::SCALE / 2);
    }

    #[test]
    fn test_zoom_saturates() {
        assert_eq!(zoomed_size(i32::MAX, 1), i32::MAX);
    }
}
