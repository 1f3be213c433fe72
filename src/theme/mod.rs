//! Settings, key bindings and colors for LTA Switcher.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and caching.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, default_catalog_path, logs_dir};
pub use settings::{SETTINGS_SKELETON_CONTENT, load_settings_from, settings};
pub use store::theme;
pub use types::{DEFAULT_INSTALL_TARGET, KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Uses `OnceLock` to ensure the mutex is constructed exactly once per process.
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
