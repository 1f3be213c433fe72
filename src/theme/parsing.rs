use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// Every key understood in `settings.conf`, used for typo suggestions.
pub(crate) const KNOWN_SETTINGS_KEYS: [&str; 10] = [
    "catalog_path",
    "install_target",
    "apply_settle_ms",
    "toast_duration_secs",
    "accent_color",
    "keybind_apply",
    "keybind_restore",
    "keybind_quit",
    "keybind_next_pane",
    "keybind_prev_pane",
];

/// Named keys accepted in keybind values, matched case-insensitively.
const NAMED_KEYS: [(&str, KeyCode); 10] = [
    ("esc", KeyCode::Esc),
    ("enter", KeyCode::Enter),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("space", KeyCode::Char(' ')),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("delete", KeyCode::Delete),
];

/// What: Map the key part of a binding (`a`, `F5`, `Enter`) onto a [`KeyCode`].
///
/// Output:
/// - `None` for empty, multi-character unknown tokens or function keys outside F1-F12.
fn key_code(token: &str) -> Option<KeyCode> {
    if let Some((_, code)) = NAMED_KEYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
    {
        return Some(*code);
    }
    if let Some(n) = token
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return (1..=12).contains(&n).then_some(KeyCode::F(n));
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(KeyCode::Char(ch.to_ascii_lowercase())),
        _ => None,
    }
}

/// What: Parse a keybind value such as `a`, `F5`, `Ctrl+R` or `Shift+Tab`.
///
/// Inputs:
/// - `value`: Modifiers (`Ctrl`, `Alt`, `Shift`) joined to a final key with `+`.
///
/// Output:
/// - `Some(KeyChord)`; `None` for an unknown modifier or key.
///
/// Details:
/// - `Shift+Tab` becomes [`KeyCode::BackTab`] without modifiers, which is how terminals report it.
pub(crate) fn parse_key_chord(value: &str) -> Option<KeyChord> {
    let value = value.trim();
    let (prefix, key) = value.rsplit_once('+').unwrap_or(("", value));
    let mut mods = KeyModifiers::empty();
    for m in prefix.split('+').map(str::trim).filter(|m| !m.is_empty()) {
        mods |= match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }
    let code = key_code(key.trim())?;
    if code == KeyCode::Tab && mods == KeyModifiers::SHIFT {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification, already stripped of inline comments.
///
/// Output:
/// - `Some(Color)` for `#RRGGBB` hex or `R,G,B` decimal triplets; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Suggest the closest known settings key for a typo.
///
/// Inputs:
/// - `input`: Normalized key from the user's file.
///
/// Output:
/// - `Some(&'static str)` when the best match is within edit distance 3; `None` otherwise.
pub(crate) fn nearest_key(input: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for &k in &KNOWN_SETTINGS_KEYS {
        let d = levenshtein(input, k);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((k, d));
        }
    }
    best.and_then(|(k, d)| if d <= 3 { Some(k) } else { None })
}

/// What: Compute the Levenshtein edit distance between two strings.
///
/// Details:
/// - Uses a rolling dynamic programming table to reduce allocations while iterating.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let m = b.chars().count();
    let mut dp: Vec<usize> = (0..=m).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let tmp = dp[j + 1];
            let cost = usize::from(ca != cb);
            dp[j + 1] = std::cmp::min(std::cmp::min(dp[j + 1] + 1, dp[j] + 1), prev + cost);
            prev = tmp;
        }
    }
    dp[m]
}

/// What: Remove inline comments from a configuration value while preserving leading hex markers.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and secondary `#` characters without harming leading `#RRGGBB` values.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Keybind values map onto the chords the keymap compares against.
    ///
    /// Inputs:
    /// - `F5`, `R`, `Ctrl+R`, `shift + tab`, `Space`, plus invalid `F13`, `Hyper+a`, `Ctrl+`.
    ///
    /// Output:
    /// - Lowercased chars, Ctrl modifier kept, Shift+Tab as plain BackTab; invalid values rejected.
    fn parsing_keybind_values() {
        assert_eq!(parse_key_chord("F5"), Some(KeyChord::plain(KeyCode::F(5))));
        assert_eq!(parse_key_chord("R"), Some(KeyChord::plain(KeyCode::Char('r'))));
        let kc = parse_key_chord("Ctrl+R").expect("chord");
        assert_eq!(kc.code, KeyCode::Char('r'));
        assert_eq!(kc.mods, KeyModifiers::CONTROL);
        assert_eq!(
            parse_key_chord("shift + tab"),
            Some(KeyChord::plain(KeyCode::BackTab))
        );
        assert_eq!(parse_key_chord("Space"), Some(KeyChord::plain(KeyCode::Char(' '))));
        assert!(parse_key_chord("F13").is_none());
        assert!(parse_key_chord("Hyper+a").is_none());
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Color literals accept hex and decimal triplets.
    ///
    /// Inputs:
    /// - `#22c55e`, `34,197,94`, and garbage.
    ///
    /// Output:
    /// - Equal RGB colors for the first two; `None` for garbage.
    fn parsing_color_formats() {
        assert_eq!(parse_color_value("#22c55e"), Some(Color::Rgb(34, 197, 94)));
        assert_eq!(parse_color_value("34, 197, 94"), Some(Color::Rgb(34, 197, 94)));
        assert_eq!(parse_color_value("256,0,0"), None);
        assert_eq!(parse_color_value("green-ish"), None);
    }

    #[test]
    /// What: Inline comments are stripped without harming hex colors.
    ///
    /// Inputs:
    /// - Values with trailing `#` and `//` comments.
    ///
    /// Output:
    /// - Trimmed values.
    fn strip_inline_comment_keeps_leading_hex() {
        assert_eq!(strip_inline_comment("#22c55e # accent"), "#22c55e");
        assert_eq!(strip_inline_comment("500 // ms"), "500");
        assert_eq!(strip_inline_comment("  a  "), "a");
    }

    #[test]
    /// What: Typos in settings keys get a suggestion.
    ///
    /// Inputs:
    /// - `install_targt`, `totally_unrelated_key`.
    ///
    /// Output:
    /// - Suggestion for the first, none for the second.
    fn nearest_key_suggests_close_match() {
        assert_eq!(nearest_key("install_targt"), Some("install_target"));
        assert_eq!(nearest_key("totally_unrelated_key"), None);
    }
}
