use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::spinner;
use crate::state::AppState;
use crate::theme::{KeyChord, theme};

/// What: First configured label for an action, or `"-"` when unbound.
fn first_label(chords: &[KeyChord]) -> String {
    chords.first().map_or_else(|| "-".to_string(), KeyChord::label)
}

/// What: Render the footer: apply and restore buttons plus key hints.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; button rects are recorded for mouse hit-testing.
/// - `area`: Target rect (three rows).
///
/// Details:
/// - The apply button is greyed while no competition is selected or an operation is running,
///   and shows a spinner while applying.
pub fn render_footer(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(24),
            Constraint::Min(10),
        ])
        .split(area);

    let apply_enabled = app.can_apply();
    let apply_label = if app.install.is_applying {
        format!("{} Applying...", spinner(app.spinner_frame))
    } else {
        "Apply scoreboard".to_string()
    };
    let apply_style = if apply_enabled {
        Style::default()
            .fg(th.base)
            .bg(th.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay1).bg(th.mantle)
    };
    let apply = Paragraph::new(Line::from(Span::styled(apply_label, apply_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if apply_enabled {
                    th.accent
                } else {
                    th.surface1
                })),
        );
    f.render_widget(apply, cols[0]);
    app.apply_rect = Some((cols[0].x, cols[0].y, cols[0].width, cols[0].height));

    let restore_enabled = !app.install.is_busy();
    let restore_label = if app.install.is_removing {
        format!("{} Restoring...", spinner(app.spinner_frame))
    } else {
        "Restore original".to_string()
    };
    let restore = Paragraph::new(Line::from(Span::styled(
        restore_label,
        Style::default().fg(if restore_enabled { th.red } else { th.overlay1 }),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if restore_enabled {
                th.red
            } else {
                th.surface1
            })),
    );
    f.render_widget(restore, cols[1]);
    app.restore_rect = Some((cols[1].x, cols[1].y, cols[1].width, cols[1].height));

    let km = &app.keymap;
    let key = |s: String| Span::styled(s, Style::default().fg(th.accent));
    let txt = |s: &'static str| Span::styled(s, Style::default().fg(th.subtext0));
    let hints = Line::from(vec![
        key(first_label(&km.pane_next)),
        txt(" pane  "),
        key("↑/↓".to_string()),
        txt(" move  "),
        key(first_label(&km.select)),
        txt(" select  "),
        key(first_label(&km.apply)),
        txt(" apply  "),
        key(first_label(&km.restore)),
        txt(" restore  "),
        key(first_label(&km.exit)),
        txt(" quit"),
    ]);
    let hints = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(hints, cols[2]);
}
