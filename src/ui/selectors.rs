use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::helpers::{flag_marker, inner_tuple, logo_marker, spinner};
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

/// What: Bordered block for a selector, styled by focus and enabled state.
fn selector_block<'a>(th: &Theme, title: Line<'a>, focused: bool, enabled: bool) -> Block<'a> {
    let border = if !enabled {
        th.surface1
    } else if focused {
        th.accent
    } else {
        th.overlay1
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// What: Title line with an optional spinner.
fn title_line(th: &Theme, text: &str, focused: bool, loading: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        text.to_string(),
        Style::default().fg(if focused { th.accent } else { th.overlay1 }),
    )];
    if let Some(frame) = loading {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            spinner(frame).to_string(),
            Style::default().fg(th.sapphire),
        ));
    }
    Line::from(spans)
}

/// What: Render the country selector.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; the list cursor and hit-test rect are updated.
/// - `area`: Target rect.
///
/// Details:
/// - The committed country is drawn bold with a `●` marker; the cursor uses the highlight style.
/// - Shows "Select a country" (or a loading line) while the list is empty.
pub fn render_countries(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Countries;
    let loading = app.countries_loading.then_some(app.spinner_frame);
    let block = selector_block(&th, title_line(&th, "Country", focused, loading), focused, true);
    app.country_rect = Some(inner_tuple(area));

    if app.selection.countries().is_empty() {
        let text = if app.countries_loading {
            "Loading countries..."
        } else {
            "Select a country"
        };
        let p = Paragraph::new(Span::styled(text, Style::default().fg(th.subtext0))).block(block);
        f.render_widget(p, area);
        return;
    }

    let selected_id = app.selection.selected_country_id().trim().to_string();
    let items: Vec<ListItem> = app
        .selection
        .countries()
        .iter()
        .map(|c| {
            let committed = c.id.to_string() == selected_id;
            let mut name_style = Style::default().fg(th.text);
            if committed {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(
                    if committed { "● " } else { "  " },
                    Style::default().fg(th.accent),
                ),
                Span::styled(
                    format!("{} ", flag_marker(&mut app.images, c)),
                    Style::default().fg(th.subtext0),
                ),
                Span::styled(c.name.clone(), name_style),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.country_list);
}

/// What: Render the competition selector.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; the list cursor and hit-test rect are updated.
/// - `area`: Target rect.
///
/// Details:
/// - Greyed out and empty until a country is selected.
pub fn render_competitions(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let enabled = app.selection.has_country();
    let focused = enabled && app.focus == Focus::Competitions;
    let loading = app.competitions_loading.then_some(app.spinner_frame);
    let block = selector_block(
        &th,
        title_line(&th, "Competition", focused, loading),
        focused,
        enabled,
    );
    app.competition_rect = Some(inner_tuple(area));

    if !enabled || app.selection.competitions().is_empty() {
        let text = if !enabled {
            "Select a country first"
        } else if app.competitions_loading {
            "Loading competitions..."
        } else {
            "No competitions for this country"
        };
        let p = Paragraph::new(Span::styled(text, Style::default().fg(th.overlay1))).block(block);
        f.render_widget(p, area);
        return;
    }

    let selected_id = app.selection.selected_competition_id().trim().to_string();
    let items: Vec<ListItem> = app
        .selection
        .competitions()
        .iter()
        .map(|c| {
            let committed = c.id.to_string() == selected_id;
            let mut name_style = Style::default().fg(th.text);
            if committed {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(
                    if committed { "● " } else { "  " },
                    Style::default().fg(th.accent),
                ),
                Span::raw(format!("{} ", logo_marker(&mut app.images, c))),
                Span::styled(c.name.clone(), name_style),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.accent))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.competition_list);
}
