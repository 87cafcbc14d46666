use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Control, PageStatus};
use crate::theme::theme;
use crate::ui::helpers::width_u16;

/// What: Render the button row (Apply, Reset, Previous, page indicator, Next).
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (page label, status)
/// - `area`: One-row target rectangle
///
/// Output:
/// - Draws the buttons and records their rects in `app.control_rects`.
///
/// Details:
/// - "Previous" is dimmed on page 1, where it does nothing.
pub fn render_controls(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let button = Style::default().fg(th.base).bg(th.sapphire).add_modifier(Modifier::BOLD);
    let dimmed = Style::default().fg(th.overlay1).bg(th.surface1);
    let page_style = match app.status {
        PageStatus::Idle => Style::default().fg(th.text),
        PageStatus::Loading => Style::default().fg(th.yellow),
        PageStatus::Error => Style::default().fg(th.red),
    };

    app.control_rects.clear();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    for control in Control::ALL {
        if control == Control::Next {
            let indicator = format!(" Page {} ", app.page_label);
            x = x.saturating_add(width_u16(&indicator));
            spans.push(Span::styled(indicator, page_style));
        }
        let caption = format!(" {} ", control.label());
        let style = if control == Control::Prev && app.page <= 1 {
            dimmed
        } else {
            button
        };
        let w = width_u16(&caption);
        if x.saturating_add(w) <= area.x.saturating_add(area.width) {
            app.control_rects.push((control, (x, area.y, w, 1)));
        }
        spans.push(Span::styled(caption, style));
        spans.push(Span::raw("  "));
        x = x.saturating_add(w).saturating_add(2);
    }
    let p = Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base));
    f.render_widget(p, area);
}
