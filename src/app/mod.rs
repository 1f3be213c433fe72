//! LTA Switcher application module: terminal setup and the async runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{HEADLESS_ENV, apply_settings_to_app_state, run, workers};
