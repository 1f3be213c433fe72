use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::SystemTime;

use crate::theme::paths::{config_dir, resolve_settings_config_path};
use crate::theme::types::Settings;
use tracing::{debug, info, warn};

mod parse_settings;

use parse_settings::parse_settings;

/// Commented defaults written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# LTA Switcher settings\n\
#\n\
# Format: key = value. Lines starting with # are comments.\n\
#\n\
# Catalog manifest (relative paths resolve against this file's directory)\n\
# catalog_path = catalog/catalog.toml\n\
#\n\
# Overlay file replaced when a scoreboard is applied\n\
# install_target = C:\\FC 26 Live Editor\\mods\\root\\Legacy\\data\\ui\\game\\overlays\\Generic\\overlay_9002.BIG\n\
#\n\
# Apply button cool-down after an install finishes\n\
apply_settle_ms = 500\n\
#\n\
# Toast lifetime\n\
toast_duration_secs = 4\n\
#\n\
# Highlight color (#RRGGBB or R,G,B)\n\
# accent_color = #22c55e\n\
#\n\
# Key bindings (e.g. a, F5, Ctrl+R, Shift+Tab)\n\
# keybind_apply = a\n\
# keybind_restore = r\n\
# keybind_quit = q\n\
# keybind_next_pane = Tab\n\
# keybind_prev_pane = Shift+Tab\n";

struct SettingsCache {
    settings: Settings,
    path: Option<PathBuf>,
    mtime: Option<SystemTime>,
    initialized: bool,
}

impl SettingsCache {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            path: None,
            mtime: None,
            initialized: false,
        }
    }
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Write the skeleton settings file when none exists yet.
///
/// Output:
/// - Path of the written file, or `None` when writing failed.
fn write_skeleton() -> Option<PathBuf> {
    let path = config_dir().join("settings.conf");
    match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            info!(path = %path.display(), "[Config] wrote default settings.conf");
            Some(path)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] could not write default settings");
            None
        }
    }
}

/// What: Read and parse one settings file.
///
/// Inputs:
/// - `path`: Settings file.
///
/// Output:
/// - Parsed settings; defaults when the file is unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, path, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf unreadable, using defaults"
            );
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present, writing a skeleton otherwise)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - Re-parses only when the file's modification time changed since the last call.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| Mutex::new(SettingsCache::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let path = resolve_settings_config_path().or_else(write_skeleton);
    let mtime = path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());

    if cache.initialized && cache.path == path && cache.mtime == mtime {
        if tracing::enabled!(tracing::Level::TRACE) {
            debug!("[Config] Using cached settings (unchanged file)");
        }
        return cache.settings.clone();
    }

    let out = path
        .as_deref()
        .map_or_else(Settings::default, load_settings_from);
    cache.path = path;
    cache.mtime = mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}
