use std::time::Instant;

use crate::state::AppState;

/// What: Periodic housekeeping driven by the tick worker.
///
/// Inputs:
/// - `app`: Application state.
///
/// Details:
/// - Drops expired toasts and advances the spinner while something is loading.
pub fn handle_tick(app: &mut AppState) {
    app.toasts.expire(Instant::now());
    if app.countries_loading || app.competitions_loading || app.install.is_busy() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The spinner only advances while work is pending.
    ///
    /// Inputs:
    /// - Fresh state (countries loading), then idle state.
    ///
    /// Output:
    /// - Frame advances once, then stays put.
    fn tick_advances_spinner_only_when_busy() {
        let mut app = AppState::default();
        handle_tick(&mut app);
        assert_eq!(app.spinner_frame, 1);
        app.countries_loading = false;
        handle_tick(&mut app);
        assert_eq!(app.spinner_frame, 1);
    }
}
