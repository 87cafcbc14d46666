use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus, ListView, PageStatus};
use crate::theme::theme;

/// Rows needed by the footer for the current settings.
#[must_use]
pub const fn footer_height(app: &AppState) -> u16 {
    if app.show_keybinds_footer { 2 } else { 1 }
}

/// What: Render the status line and, when enabled, the key hints line.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (status, cache, focus, footer flag)
/// - `area`: Target rectangle at the bottom of the screen
///
/// Output:
/// - Draws the footer; highlights hints for the focused pane.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (state, color) = match app.status {
        PageStatus::Idle => ("idle", th.green),
        PageStatus::Loading => ("loading", th.yellow),
        PageStatus::Error => ("error", th.red),
    };
    let shown = match app.list_view {
        ListView::Table => format!("{} recipes", app.cache.len()),
        ListView::Empty => "no results".to_string(),
        ListView::Error(_) => "request failed".to_string(),
        ListView::Pending => String::new(),
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" Page {} ", app.page_label), Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{state}] "), Style::default().fg(color)),
        Span::styled(shown, Style::default().fg(th.subtext0)),
        Span::styled(format!("  {}", app.server_url), Style::default().fg(th.overlay1)),
    ])];
    if app.show_keybinds_footer {
        let key = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
        let desc = Style::default().fg(th.overlay1);
        let hints: &[(&str, &str)] = match app.focus {
            Focus::Filter(_) => &[
                ("Enter", "apply"),
                ("Ctrl+R", "reset"),
                ("Tab", "next field"),
                ("Ctrl+C", "quit"),
            ],
            Focus::Results => &[
                ("↑/↓", "move"),
                ("Enter", "details"),
                ("←/→", "page"),
                ("Ctrl+R", "reset"),
                ("Tab", "filters"),
                ("q", "quit"),
            ],
        };
        let mut spans = vec![Span::raw(" ")];
        for (k, d) in hints {
            spans.push(Span::styled(*k, key));
            spans.push(Span::styled(format!(" {d}   "), desc));
        }
        lines.push(Line::from(spans));
    }
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(th.base)),
        area,
    );
}
