use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::backend::SharedBackend;
use crate::logic::request_countries;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod handlers;
pub mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use workers::{spawn_event_thread, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup (used by the smoke test).
pub const HEADLESS_ENV: &str = "LTA_SWITCHER_TEST_HEADLESS";

/// What: Copy the session-relevant settings into a fresh state.
///
/// Inputs:
/// - `app`: State to configure.
/// - `settings`: Loaded settings.
pub fn apply_settings_to_app_state(app: &mut AppState, settings: &Settings) {
    app.keymap = settings.keymap.clone();
    app.toasts.set_lifetime(settings.toast_duration());
}

/// What: Run the LTA Switcher TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `backend`: Catalog and install backend.
/// - `settings`: Loaded settings (keymap, settle delay, toast lifetime).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Headless mode (`LTA_SWITCHER_TEST_HEADLESS=1`) skips raw mode, rendering and the
///   input thread; the loop keeps serving background channels until aborted.
/// - The country list is requested once at startup.
pub async fn run(backend: SharedBackend, settings: Settings) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState::default();
    apply_settings_to_app_state(&mut app, &settings);

    let mut channels = Channels::new(&backend, settings.apply_settle());
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    tracing::info!(headless, "[Runtime] started");

    request_countries(&mut app, &channels.catalog_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
