use std::path::{Path, PathBuf};

use tracing::warn;

use crate::theme::parsing::{
    nearest_key, parse_color_value, parse_key_chord, strip_inline_comment,
};
use crate::theme::types::{KeyChord, Settings};

/// What: Replace a keymap entry with a parsed chord.
///
/// Inputs:
/// - `key`: Config key, for diagnostics.
/// - `value`: Raw chord text.
/// - `target`: Keymap field to overwrite.
///
/// Details:
/// - Invalid chords keep the default binding and log a warning.
fn assign_keybind(key: &str, value: &str, target: &mut Vec<KeyChord>) {
    if let Some(ch) = parse_key_chord(value) {
        *target = vec![ch];
    } else {
        warn!(key, value, "[Config] invalid key chord, keeping default");
    }
}

/// What: Resolve a configured path, relative entries against the settings file's directory.
fn resolve_path(value: &str, settings_path: &Path) -> PathBuf {
    let p = PathBuf::from(value);
    if p.is_absolute() || value.starts_with(r"\\") || value.get(1..2) == Some(":") {
        return p;
    }
    settings_path
        .parent()
        .map_or_else(|| p.clone(), |dir| dir.join(&p))
}

/// What: Parse `settings.conf` content into [`Settings`].
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings_path`: Location of the file; relative paths resolve against its directory.
/// - `settings`: Settings to populate, pre-filled with defaults.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Invalid values keep the default and log a warning.
/// - Unknown keys log a "did you mean" suggestion when one is close.
pub fn parse_settings(content: &str, settings_path: &Path, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "catalog_path" | "catalog" => {
                if !val.is_empty() {
                    settings.catalog_path = resolve_path(val, settings_path);
                }
            }
            "install_target" | "target" => {
                if !val.is_empty() {
                    settings.install_target = resolve_path(val, settings_path);
                }
            }
            "apply_settle_ms" => match val.parse::<u64>() {
                Ok(v) => settings.apply_settle_ms = v,
                Err(_) => warn!(value = val, "[Config] apply_settle_ms is not a number"),
            },
            "toast_duration_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.toast_duration_secs = v,
                _ => warn!(value = val, "[Config] toast_duration_secs must be a positive number"),
            },
            "accent_color" | "accent" => match parse_color_value(val) {
                Some(c) => settings.accent = Some(c),
                None => warn!(value = val, "[Config] accent_color is not #RRGGBB or R,G,B"),
            },
            "keybind_apply" => assign_keybind(&key, val, &mut settings.keymap.apply),
            "keybind_restore" | "keybind_remove" => {
                assign_keybind(&key, val, &mut settings.keymap.restore);
            }
            "keybind_quit" | "keybind_exit" => {
                assign_keybind(&key, val, &mut settings.keymap.exit);
            }
            "keybind_next_pane" | "keybind_pane_next" => {
                assign_keybind(&key, val, &mut settings.keymap.pane_next);
            }
            "keybind_prev_pane" | "keybind_pane_prev" => {
                assign_keybind(&key, val, &mut settings.keymap.pane_prev);
            }
            other => {
                if let Some(suggestion) = nearest_key(other) {
                    warn!(key = other, suggestion, "[Config] unknown setting, did you mean?");
                } else {
                    warn!(key = other, "[Config] unknown setting ignored");
                }
            }
        }
    }
}
