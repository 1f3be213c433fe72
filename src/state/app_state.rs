//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::media::ImageCache;
use crate::state::notify::Toasts;
use crate::state::selection::SelectionStore;
use crate::state::types::Focus;
use crate::theme::KeyMap;

/// In-flight flags of the install/remove workflow.
///
/// Apply and remove share one guard: while either is running the other is
/// refused, so at most one write to the overlay file is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallState {
    /// An apply is running or still inside its settle delay.
    pub is_applying: bool,
    /// A remove is running.
    pub is_removing: bool,
    /// Loading toast tied to the running remove, if any.
    pub remove_toast: Option<u64>,
}

impl InstallState {
    /// Whether any install-side operation is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.is_applying || self.is_removing
    }
}

/// Application state owned by the event loop.
///
/// Only the event loop mutates this value; background workers report back over
/// channels, so every mutation is atomic with respect to the others.
#[derive(Debug)]
pub struct AppState {
    /// Cascading country → competition selection.
    pub selection: SelectionStore,
    /// Which selector has focus.
    pub focus: Focus,
    /// Cursor in the country list.
    pub country_list: ListState,
    /// Cursor in the competition list.
    pub competition_list: ListState,
    /// Install/remove in-flight flags.
    pub install: InstallState,
    /// Toast queue.
    pub toasts: Toasts,
    /// Resolved flag/logo references for the current lists.
    pub images: ImageCache,
    /// Key bindings.
    pub keymap: KeyMap,
    /// `true` until the first country reply arrives.
    pub countries_loading: bool,
    /// `true` while a competition fetch for the current generation is pending.
    pub competitions_loading: bool,
    /// Spinner animation frame, advanced on every tick.
    pub spinner_frame: usize,
    /// Inner rect of the country list (x, y, width, height) for mouse hit-testing.
    pub country_rect: Option<(u16, u16, u16, u16)>,
    /// Inner rect of the competition list for mouse hit-testing.
    pub competition_rect: Option<(u16, u16, u16, u16)>,
    /// Apply button rect.
    pub apply_rect: Option<(u16, u16, u16, u16)>,
    /// Restore button rect.
    pub restore_rect: Option<(u16, u16, u16, u16)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selection: SelectionStore::new(),
            focus: Focus::Countries,
            country_list: ListState::default(),
            competition_list: ListState::default(),
            install: InstallState::default(),
            toasts: Toasts::default(),
            images: ImageCache::new(),
            keymap: KeyMap::default(),
            countries_loading: true,
            competitions_loading: false,
            spinner_frame: 0,
            country_rect: None,
            competition_rect: None,
            apply_rect: None,
            restore_rect: None,
        }
    }
}

impl AppState {
    /// What: Whether the apply control is currently enabled.
    ///
    /// Output:
    /// - `true` when a competition detail is selected and nothing is in flight.
    #[must_use]
    pub const fn can_apply(&self) -> bool {
        self.selection.selected_competition().is_some() && !self.install.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A fresh state cannot apply and is waiting for countries.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - `can_apply` is false, `countries_loading` is true, nothing is busy.
    fn default_state_is_idle() {
        let app = AppState::default();
        assert!(!app.can_apply());
        assert!(app.countries_loading);
        assert!(!app.install.is_busy());
        assert_eq!(app.focus, Focus::Countries);
    }
}
