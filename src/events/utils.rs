use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::theme::KeyChord;

/// What: Determine whether a key event matches any chord in a list.
///
/// Inputs:
/// - `ke`: Key event from the terminal
/// - `list`: List of configured key chords to match against
///
/// Output:
/// - `true` if the key event matches any chord in the list, `false` otherwise
///
/// Details:
/// - Treats Shift+<char> from config as equivalent to uppercase char without Shift from terminal.
/// - Handles cases where terminals report Shift inconsistently.
pub fn matches_any(ke: &KeyEvent, list: &[KeyChord]) -> bool {
    list.iter().any(|c| {
        if (c.code, c.mods) == (ke.code, ke.modifiers) {
            return true;
        }
        match (c.code, ke.code) {
            (KeyCode::Char(cfg_ch), KeyCode::Char(ev_ch)) => {
                if !c.mods.contains(KeyModifiers::SHIFT) {
                    return false;
                }
                // Accept uppercase event regardless of SHIFT flag
                if ev_ch == cfg_ch.to_ascii_uppercase() {
                    return true;
                }
                ke.modifiers.contains(KeyModifiers::SHIFT) && ev_ch.to_ascii_lowercase() == cfg_ch
            }
            _ => false,
        }
    })
}

/// Whether a point lies inside an `(x, y, width, height)` rect.
pub const fn is_in_rect(mx: u16, my: u16, rect: Option<(u16, u16, u16, u16)>) -> bool {
    match rect {
        Some((x, y, w, h)) => {
            mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
        }
        None => false,
    }
}
