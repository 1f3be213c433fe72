//! Cursor movement and selection commits for the two selector lists.

use tokio::sync::mpsc;

use crate::logic::{choose_competition, choose_country};
use crate::state::{AppState, CatalogRequest, Focus};

/// What: Move the cursor of the focused list by `delta`, clamped to its bounds.
///
/// Inputs:
/// - `app`: Application state.
/// - `delta`: Rows to move; negative moves up.
///
/// Details:
/// - The highlighted row is not committed; Enter or a click commits it.
pub fn move_cursor(app: &mut AppState, delta: isize) {
    let (len, list) = match app.focus {
        Focus::Countries => (app.selection.countries().len(), &mut app.country_list),
        Focus::Competitions => (app.selection.competitions().len(), &mut app.competition_list),
    };
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(len - 1);
    list.select(Some(next));
}

/// What: Commit the highlighted row of the focused list as the selection.
///
/// Inputs:
/// - `app`: Application state.
/// - `catalog_tx`: Channel to the catalog worker for the competitions fetch.
///
/// Details:
/// - Committing a country moves focus to the competition list once a fetch is under way.
pub fn commit_cursor(app: &mut AppState, catalog_tx: &mpsc::UnboundedSender<CatalogRequest>) {
    match app.focus {
        Focus::Countries => {
            let Some(id) = app
                .country_list
                .selected()
                .and_then(|i| app.selection.countries().get(i))
                .map(|c| c.id.to_string())
            else {
                return;
            };
            choose_country(app, &id, catalog_tx);
            if app.competitions_loading {
                app.focus = Focus::Competitions;
            }
        }
        Focus::Competitions => {
            if let Some(id) = app
                .competition_list
                .selected()
                .and_then(|i| app.selection.competitions().get(i))
                .map(|c| c.id.to_string())
            {
                choose_competition(app, &id);
            }
        }
    }
}

/// What: Cycle focus between the selectors.
///
/// Details:
/// - The competition selector is disabled until a country is selected.
pub fn cycle_focus(app: &mut AppState) {
    app.focus = match app.focus {
        Focus::Countries if app.selection.has_country() => Focus::Competitions,
        _ => Focus::Countries,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogReply, Competition, CompetitionsReply, Country};

    fn loaded_state() -> AppState {
        let mut app = AppState::default();
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Countries(Ok(vec![
                Country {
                    id: 1,
                    name: "Argentina".into(),
                    flag_blob: Vec::new(),
                },
                Country {
                    id: 2,
                    name: "Brasil".into(),
                    flag_blob: Vec::new(),
                },
            ])),
        );
        app
    }

    #[test]
    /// What: Cursor movement clamps at both ends.
    ///
    /// Inputs:
    /// - Two countries; move up from the top, then far down.
    ///
    /// Output:
    /// - Cursor stays within `0..=1`.
    fn move_cursor_clamps() {
        let mut app = loaded_state();
        move_cursor(&mut app, -1);
        assert_eq!(app.country_list.selected(), Some(0));
        move_cursor(&mut app, 10);
        assert_eq!(app.country_list.selected(), Some(1));
    }

    #[test]
    /// What: Committing a country dispatches a fetch and moves focus.
    ///
    /// Inputs:
    /// - Cursor on Brasil, commit, reply with one competition, commit again.
    ///
    /// Output:
    /// - Request for country 2; focus on competitions; competition detail selected.
    fn commit_country_then_competition() {
        let mut app = loaded_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        move_cursor(&mut app, 1);
        commit_cursor(&mut app, &tx);
        assert_eq!(app.selection.selected_country_id(), "2");
        assert_eq!(app.focus, Focus::Competitions);
        let CatalogRequest::Competitions(req) = rx.try_recv().expect("request") else {
            panic!("expected competitions request");
        };
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Competitions(CompetitionsReply {
                generation: req.generation,
                country_id: 2,
                result: Ok(vec![Competition {
                    id: 30,
                    name: "Brasileirão".into(),
                    logo_blob: Vec::new(),
                }]),
            }),
        );
        commit_cursor(&mut app, &tx);
        assert_eq!(app.selection.selected_competition().map(|c| c.id), Some(30));
    }

    #[test]
    /// What: The competition selector cannot take focus without a country.
    ///
    /// Inputs:
    /// - Fresh state; cycle focus.
    ///
    /// Output:
    /// - Focus remains on countries.
    fn cycle_focus_requires_country() {
        let mut app = loaded_state();
        cycle_focus(&mut app);
        assert_eq!(app.focus, Focus::Countries);
        let (tx, _rx) = mpsc::unbounded_channel();
        commit_cursor(&mut app, &tx);
        cycle_focus(&mut app);
        assert_eq!(app.focus, Focus::Countries);
        cycle_focus(&mut app);
        assert_eq!(app.focus, Focus::Competitions);
    }
}
