//! Event handling layer for the LTA Switcher TUI.
//!
//! `handle_event` dispatches key presses through the configured [`KeyMap`](crate::theme::KeyMap)
//! and delegates list navigation and mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, CatalogRequest, InstallRequest};

mod lists;
mod mouse;
mod utils;

pub use utils::matches_any;

/// What: Handle one key press.
///
/// Output:
/// - `true` when the key requests exit.
fn handle_key(
    ke: &KeyEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
    install_tx: &mpsc::UnboundedSender<InstallRequest>,
) -> bool {
    let km = app.keymap.clone();
    if matches_any(ke, &km.exit) {
        return true;
    }
    if matches_any(ke, &km.pane_next) || matches_any(ke, &km.pane_prev) {
        lists::cycle_focus(app);
    } else if matches_any(ke, &km.move_up) {
        lists::move_cursor(app, -1);
    } else if matches_any(ke, &km.move_down) {
        lists::move_cursor(app, 1);
    } else if matches_any(ke, &km.select) {
        lists::commit_cursor(app, catalog_tx);
    } else if matches_any(ke, &km.apply) {
        crate::logic::apply(app, install_tx);
    } else if matches_any(ke, &km.restore) {
        crate::logic::remove(app, install_tx);
    }
    false
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
    install_tx: &mpsc::UnboundedSender<InstallRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => {
            handle_key(&ke, app, catalog_tx, install_tx)
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app, catalog_tx, install_tx),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogReply, Competition, CompetitionsReply, Country, Focus, Severity};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    /// What: Drive the full keyboard flow: pick country, pick competition, apply.
    ///
    /// Inputs:
    /// - Argentina with Liga Profesional (id 10); keys Enter, Enter, `a`.
    ///
    /// Output:
    /// - Install request for competition 10 and `is_applying` set.
    fn keyboard_flow_reaches_apply() {
        let mut app = AppState::default();
        let (ctx, mut crx) = mpsc::unbounded_channel();
        let (itx, mut irx) = mpsc::unbounded_channel();
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Countries(Ok(vec![Country {
                id: 1,
                name: "Argentina".into(),
                flag_blob: b"<svg/>".to_vec(),
            }])),
        );

        // Apply before selecting anything only warns
        assert!(!handle_event(key(KeyCode::Char('a')), &mut app, &ctx, &itx));
        assert_eq!(
            app.toasts.items().last().map(|t| t.severity),
            Some(Severity::Warning)
        );

        handle_event(key(KeyCode::Enter), &mut app, &ctx, &itx);
        let Ok(CatalogRequest::Competitions(req)) = crx.try_recv() else {
            panic!("expected competitions request");
        };
        assert_eq!(app.focus, Focus::Competitions);
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Competitions(CompetitionsReply {
                generation: req.generation,
                country_id: req.country_id,
                result: Ok(vec![Competition {
                    id: 10,
                    name: "Liga Profesional".into(),
                    logo_blob: vec![1, 2],
                }]),
            }),
        );
        handle_event(key(KeyCode::Enter), &mut app, &ctx, &itx);
        handle_event(key(KeyCode::Char('a')), &mut app, &ctx, &itx);
        assert_eq!(
            irx.try_recv().ok(),
            Some(InstallRequest::Apply { competition_id: 10 })
        );
        assert!(app.install.is_applying);
    }

    #[test]
    /// What: Quit chords end the loop; key releases are ignored.
    ///
    /// Inputs:
    /// - `q`, `Ctrl+C`, and a release event for `q`.
    ///
    /// Output:
    /// - `true` for the presses, `false` for the release.
    fn quit_keys_exit() {
        let mut app = AppState::default();
        let (ctx, _crx) = mpsc::unbounded_channel();
        let (itx, _irx) = mpsc::unbounded_channel();
        assert!(handle_event(key(KeyCode::Char('q')), &mut app, &ctx, &itx));
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(ctrl_c, &mut app, &ctx, &itx));
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!handle_event(CEvent::Key(release), &mut app, &ctx, &itx));
    }
}
