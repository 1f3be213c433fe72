use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::spinner;
use crate::state::{AppState, Severity};
use crate::theme::{Theme, theme};

/// Widest a toast may grow, in cells.
const MAX_TOAST_WIDTH: u16 = 48;

/// Icon and color for a severity.
fn severity_style(th: &Theme, severity: Severity, frame: usize) -> (&'static str, ratatui::style::Color) {
    match severity {
        Severity::Info => ("ℹ", th.sapphire),
        Severity::Success => ("✔", th.green),
        Severity::Warning => ("⚠", th.yellow),
        Severity::Error => ("✖", th.red),
        Severity::Loading => (spinner(frame), th.sapphire),
    }
}

/// What: Render the toast stack in the bottom-right corner, newest at the bottom.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (toasts, spinner frame).
/// - `area`: Full frame area.
///
/// Details:
/// - Each toast is a bordered three-row box sized to its message; toasts that do not
///   fit above the footer are skipped.
pub fn render_toasts(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let max_w = MAX_TOAST_WIDTH.min(area.width.saturating_sub(2));
    if max_w < 8 {
        return;
    }
    // Keep clear of the footer
    let mut bottom = area.y + area.height.saturating_sub(3);
    for toast in app.toasts.items().iter().rev() {
        let (icon, color) = severity_style(&th, toast.severity, app.spinner_frame);
        let text_w = u16::try_from(toast.message.width()).unwrap_or(u16::MAX);
        let w = text_w.saturating_add(6).min(max_w);
        let h: u16 = 3;
        if bottom < area.y + h {
            break;
        }
        let rect = Rect {
            x: area.x + area.width.saturating_sub(w + 1),
            y: bottom - h,
            width: w,
            height: h,
        };
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(toast.message.clone(), Style::default().fg(th.text)),
        ]);
        let p = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
        bottom -= h;
    }
}
