use std::sync::OnceLock;

use super::settings::settings;
use super::types::Theme;

/// Global theme store, loaded from `settings.conf` on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Build the palette for the current settings.
///
/// Output:
/// - Default palette with the configured accent applied.
fn load_theme() -> Theme {
    let mut theme = Theme::default();
    if let Some(accent) = settings().accent {
        theme.accent = accent;
    }
    theme
}

/// What: Return the application's theme palette.
///
/// Output:
/// - A copy of the cached [`Theme`]; loaded from settings on first use.
#[must_use]
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_theme)
}
