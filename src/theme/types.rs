use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Default overlay file replaced by an install (FC 26 Live Editor layout).
pub const DEFAULT_INSTALL_TARGET: &str =
    r"C:\FC 26 Live Editor\mods\root\Legacy\data\ui\game\overlays\Generic\overlay_9002.BIG";

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted border color for unfocused panes and disabled controls.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for captions and placeholders.
    pub subtext0: Color,
    /// Accent for selection, focused borders and the apply button.
    pub accent: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Informational toasts and loading spinners.
    pub sapphire: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x22, 0xc5, 0x5e),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Catalog manifest listing countries, competitions and their files.
    pub catalog_path: PathBuf,
    /// Overlay file inside the game directory that installs overwrite.
    pub install_target: PathBuf,
    /// How long the apply control stays disabled after an install settles.
    pub apply_settle_ms: u64,
    /// Lifetime of non-loading toasts.
    pub toast_duration_secs: u64,
    /// Configurable key bindings.
    pub keymap: KeyMap,
    /// Optional override for [`Theme::accent`].
    pub accent: Option<Color>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: super::paths::default_catalog_path(),
            install_target: PathBuf::from(DEFAULT_INSTALL_TARGET),
            apply_settle_ms: 500,
            toast_duration_secs: 4,
            keymap: KeyMap::default(),
            accent: None,
        }
    }
}

impl Settings {
    /// Settle delay as a [`Duration`].
    #[must_use]
    pub const fn apply_settle(&self) -> Duration {
        Duration::from_millis(self.apply_settle_ms)
    }

    /// Toast lifetime as a [`Duration`].
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key pressed.
    pub code: KeyCode,
    /// Modifiers held with it.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Tab", "A".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(ch) => {
                // Show uppercase character for display
                let up = ch.to_ascii_uppercase();
                if up == ' ' {
                    "Space".to_string()
                } else {
                    up.to_string()
                }
            }
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Install the selected competition's scoreboard.
    pub apply: Vec<KeyChord>,
    /// Restore the game's original scoreboard.
    pub restore: Vec<KeyChord>,
    /// Quit the app.
    pub exit: Vec<KeyChord>,
    /// Focus the next selector.
    pub pane_next: Vec<KeyChord>,
    /// Focus the previous selector.
    pub pane_prev: Vec<KeyChord>,
    /// Move the cursor up.
    pub move_up: Vec<KeyChord>,
    /// Move the cursor down.
    pub move_down: Vec<KeyChord>,
    /// Commit the highlighted row as the selection.
    pub select: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{BackTab, Char, Down, Enter, Tab, Up};
        let ctrl = KeyModifiers::CONTROL;
        Self {
            apply: vec![KeyChord::plain(Char('a'))],
            restore: vec![KeyChord::plain(Char('r'))],
            exit: vec![
                KeyChord::plain(Char('q')),
                KeyChord {
                    code: Char('c'),
                    mods: ctrl,
                },
            ],
            pane_next: vec![KeyChord::plain(Tab)],
            pane_prev: vec![KeyChord::plain(BackTab)],
            move_up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            move_down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            select: vec![KeyChord::plain(Enter)],
        }
    }
}
