//! Terminal rendering for LTA Switcher.
//!
//! Layout: a header, the two selectors stacked on the left, the preview on the
//! right, a footer with the action buttons, and the toast stack on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
pub mod helpers;
mod preview;
mod selectors;
mod toasts;

/// What: Render one frame of the UI.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; list cursors and hit-test rects are updated.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " LTA Switcher ",
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  pick a country, then a competition",
            Style::default().fg(th.subtext0),
        ),
    ]));
    f.render_widget(header, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[0]);

    selectors::render_countries(f, app, left[0]);
    selectors::render_competitions(f, app, left[1]);
    preview::render_preview(f, app, body[1]);
    footer::render_footer(f, app, rows[2]);
    toasts::render_toasts(f, app, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::state::{CatalogReply, Country};

    /// What: Collect a rendered buffer into one string.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: A fresh frame shows the placeholders and records hit-test rects.
    ///
    /// Inputs:
    /// - Default state with one loaded country, 100x30 test terminal.
    ///
    /// Output:
    /// - Country name, disabled competition hint and preview placeholder are drawn.
    fn ui_renders_placeholders() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut app = AppState::default();
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Countries(Ok(vec![Country {
                id: 1,
                name: "Argentina".into(),
                flag_blob: Vec::new(),
            }])),
        );
        app.toasts.warning("No scoreboard selected!");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        let text = buffer_text(&terminal);
        assert!(text.contains("Argentina"));
        assert!(text.contains("Select a country first"));
        assert!(text.contains("Preview area"));
        assert!(text.contains("No scoreboard selected!"));
        assert!(app.country_rect.is_some());
        assert!(app.apply_rect.is_some());
    }
}
