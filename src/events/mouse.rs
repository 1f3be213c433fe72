//! Mouse handling: click-to-select in the lists, wheel scrolling and the footer buttons.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use super::lists::{commit_cursor, move_cursor};
use super::utils::is_in_rect;
use crate::state::{AppState, CatalogRequest, Focus, InstallRequest};

/// What: Map a click row inside a list rect to an item index.
fn row_at(my: u16, rect: Option<(u16, u16, u16, u16)>, offset: usize, len: usize) -> Option<usize> {
    let (_, y, _, _) = rect?;
    let idx = offset + usize::from(my.checked_sub(y)?);
    (idx < len).then_some(idx)
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind.
/// - `app`: Mutable application state (rects, focus, lists).
/// - `catalog_tx`: Channel for competition fetches triggered by a country click.
/// - `install_tx`: Channel for apply/restore triggered by the footer buttons.
///
/// Output:
/// - `false` always; the mouse never requests exit.
///
/// Details:
/// - Left click on a list row focuses that list and commits the row.
/// - Wheel scroll over a list moves its cursor without committing.
/// - Clicks on the competition list are ignored while no country is selected.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
    install_tx: &mpsc::UnboundedSender<InstallRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    let pane = if is_in_rect(mx, my, app.country_rect) {
        Some(Focus::Countries)
    } else if is_in_rect(mx, my, app.competition_rect) && app.selection.has_country() {
        Some(Focus::Competitions)
    } else {
        None
    };
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(focus) = pane {
                let (rect, list, len) = match focus {
                    Focus::Countries => (
                        app.country_rect,
                        &mut app.country_list,
                        app.selection.countries().len(),
                    ),
                    Focus::Competitions => (
                        app.competition_rect,
                        &mut app.competition_list,
                        app.selection.competitions().len(),
                    ),
                };
                if let Some(idx) = row_at(my, rect, list.offset(), len) {
                    list.select(Some(idx));
                    app.focus = focus;
                    commit_cursor(app, catalog_tx);
                }
            } else if is_in_rect(mx, my, app.apply_rect) {
                if app.can_apply() {
                    crate::logic::apply(app, install_tx);
                }
            } else if is_in_rect(mx, my, app.restore_rect) {
                crate::logic::remove(app, install_tx);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            if let Some(focus) = pane {
                app.focus = focus;
                let delta = if matches!(m.kind, MouseEventKind::ScrollUp) {
                    -1
                } else {
                    1
                };
                move_cursor(app, delta);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogReply, Country};
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Clicking a country row selects it and requests its competitions.
    ///
    /// Inputs:
    /// - Two countries in a list rect starting at row 5; click on row 6.
    ///
    /// Output:
    /// - Second country selected; one competitions request sent.
    fn click_selects_country_row() {
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
        app.country_rect = Some((1, 5, 20, 4));
        let (ctx, mut crx) = mpsc::unbounded_channel();
        let (itx, mut irx) = mpsc::unbounded_channel();

        handle_mouse_event(click(3, 6), &mut app, &ctx, &itx);
        assert_eq!(app.selection.selected_country_id(), "2");
        assert!(matches!(crx.try_recv(), Ok(CatalogRequest::Competitions(_))));

        // Below the last item: nothing happens
        handle_mouse_event(click(3, 8), &mut app, &ctx, &itx);
        assert!(crx.try_recv().is_err());
        assert!(irx.try_recv().is_err());
    }

    #[test]
    /// What: The restore button dispatches a remove.
    ///
    /// Inputs:
    /// - Restore rect at (40, 20); click inside.
    ///
    /// Output:
    /// - `InstallRequest::Remove` sent and `is_removing` set.
    fn click_restore_button_removes() {
        let mut app = AppState::default();
        app.restore_rect = Some((40, 20, 10, 1));
        let (ctx, _crx) = mpsc::unbounded_channel();
        let (itx, mut irx) = mpsc::unbounded_channel();
        handle_mouse_event(click(42, 20), &mut app, &ctx, &itx);
        assert_eq!(irx.try_recv().ok(), Some(InstallRequest::Remove));
        assert!(app.install.is_removing);
    }
}
