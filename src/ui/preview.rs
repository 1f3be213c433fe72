use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::image_summary;
use crate::state::AppState;
use crate::theme::theme;

/// What: Render the preview pane for the selected competition.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (selection and image cache).
/// - `area`: Target rect.
///
/// Details:
/// - Without a selected competition shows the "Preview area" placeholder.
/// - Images are summarized by media type and size, with their blob reference.
pub fn render_preview(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled("Preview", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));

    let Some(comp) = app.selection.selected_competition().cloned() else {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Preview area",
                Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Select a competition to see details",
                Style::default().fg(th.overlay1),
            )),
        ];
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    };

    let logo = app.images.logo(&comp);
    let logo_text = image_summary(app.images.blob(&logo));
    let mut lines = vec![
        Line::from(Span::styled(
            comp.name.clone(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Logo:    ", Style::default().fg(th.overlay1)),
            Span::styled(logo_text, Style::default().fg(th.text)),
        ]),
    ];
    if !logo.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Source:  ", Style::default().fg(th.overlay1)),
            Span::styled(logo.to_string(), Style::default().fg(th.subtext0)),
        ]));
    }
    if let Some(country) = app.selection.selected_country().cloned() {
        let flag = app.images.flag(&country);
        lines.push(Line::from(vec![
            Span::styled("Country: ", Style::default().fg(th.overlay1)),
            Span::styled(country.name.clone(), Style::default().fg(th.text)),
            Span::styled(
                format!("  ({})", image_summary(app.images.blob(&flag))),
                Style::default().fg(th.subtext0),
            ),
        ]));
    }
    lines.push(Line::from(""));
    let apply_hint = app
        .keymap
        .apply
        .first()
        .map_or_else(|| "the apply key".to_string(), crate::theme::KeyChord::label);
    lines.push(Line::from(Span::styled(
        format!("Press {apply_hint} to install this scoreboard."),
        Style::default().fg(th.subtext0),
    )));
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(p, area);
}
