// src/keys.rs
use gtk4::gdk;

/// Key chords the window handles itself instead of passing to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ExpandWord,
}

impl Shortcut {
    /// Map a key press to a shortcut. Control chords take precedence over
    /// Alt chords when both modifiers are held.
    pub fn from_key(keyval: gdk::Key, state: gdk::ModifierType) -> Option<Self> {
        if state.contains(gdk::ModifierType::CONTROL_MASK) {
            match keyval {
                gdk::Key::plus | gdk::Key::KP_Add => Some(Shortcut::ZoomIn),
                gdk::Key::minus | gdk::Key::KP_Subtract => Some(Shortcut::ZoomOut),
                gdk::Key::equal => Some(Shortcut::ZoomReset),
                _ => None,
            }
        } else if state.contains(gdk::ModifierType::ALT_MASK) {
            match keyval {
                gdk::Key::slash => Some(Shortcut::ExpandWord),
                _ => None,
            }
        } else {
            None
        }
    }
}

/// Whether a key press ends an in-progress word expansion. Shortcuts keep
/// it going, and so does pressing a bare modifier, so Alt can be released
/// and pressed again between two Alt+/.
pub fn stops_expansion(is_modifier: bool, shortcut: Option<Shortcut>) -> bool {
    shortcut.is_none() && !is_modifier
}
