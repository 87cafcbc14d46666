use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::logic::NUTRIENT_KEYS;
use crate::state::{AppState, DetailView};
use crate::theme::{Theme, theme};
use crate::ui::helpers::{hit_rect, pad_to_width};

/// Narrowest drawer before it takes the full width.
const MIN_DRAWER_WIDTH: u16 = 44;

/// What: Compute the drawer rectangle anchored to the right edge of `area`.
#[must_use]
pub fn drawer_area(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(3) / 5)
        .max(MIN_DRAWER_WIDTH)
        .min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// What: Render the detail drawer over the right side of the screen.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (detail view, panel toggle, scroll)
/// - `area`: Whole frame area
///
/// Output:
/// - Draws the drawer and records its rect plus the total-time header rect; clears both when closed.
pub fn render_drawer(f: &mut Frame, app: &mut AppState, area: Rect) {
    let Some(view) = app.detail.as_ref() else {
        app.drawer_rect = None;
        app.total_time_rect = None;
        return;
    };
    let th = theme();
    let rect = drawer_area(area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.heading()),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " Esc close · t total time · ↑/↓ scroll ",
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let panel_h: u16 = if app.total_time_expanded { 3 } else { 1 };
    let [panel, _gap, body] = Layout::vertical([
        Constraint::Length(panel_h),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let panel_lines = total_time_lines(view, app.total_time_expanded, &th);
    f.render_widget(
        Paragraph::new(panel_lines).style(Style::default().fg(th.text).bg(th.mantle)),
        panel,
    );

    let body_lines = body_lines(view, &th);
    let max_scroll = wrapped_height(&body_lines, body.width).saturating_sub(body.height);
    app.detail_max_scroll = max_scroll;
    app.detail_scroll = app.detail_scroll.min(max_scroll);
    f.render_widget(
        Paragraph::new(body_lines)
            .style(Style::default().fg(th.text).bg(th.mantle))
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0)),
        body,
    );

    app.drawer_rect = Some(hit_rect(rect));
    app.total_time_rect = Some(hit_rect(Rect {
        height: 1.min(panel.height),
        ..panel
    }));
}

/// What: Estimate how many rows `lines` occupy when wrapped to `width` columns.
///
/// Details:
/// - Counts each line as `ceil(width_of_line / width)` rows, at least one.
///   Word wrapping can use slightly more rows; the bound only stops runaway scrolling.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let w = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|l| l.width().div_ceil(w).max(1)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Header line of the expandable panel, plus cook/prep lines when open.
fn total_time_lines(view: &DetailView, expanded: bool, th: &Theme) -> Vec<Line<'static>> {
    let marker = if expanded { "▾" } else { "▸" };
    let key = Style::default().fg(th.subtext0);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{marker} Total Time: "), key.add_modifier(Modifier::BOLD)),
        Span::styled(view.total_time.clone(), Style::default().fg(th.green)),
    ])];
    if expanded {
        lines.push(Line::from(vec![
            Span::styled("    Cook Time: ", key),
            Span::raw(view.cook_time.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Prep Time: ", key),
            Span::raw(view.prep_time.clone()),
        ]));
    }
    lines
}

/// Description, nutrition table, ingredients, and instructions.
fn body_lines(view: &DetailView, th: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(view.description.clone()), Line::from("")];
    if !view.nutrients.is_empty() {
        lines.push(Line::from(Span::styled("Nutrition", heading)));
        let key_w = NUTRIENT_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
        for (k, v) in &view.nutrients {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", pad_to_width(k, key_w)), Style::default().fg(th.subtext0)),
                Span::raw(v.clone()),
            ]));
        }
        lines.push(Line::from(""));
    }
    for (label, items) in [
        ("Ingredients", &view.ingredients),
        ("Instructions", &view.instructions),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(label, heading)));
        for (i, item) in items.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {item}", i + 1)));
        }
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_area_anchors_right_and_clamps() {
        let wide = drawer_area(Rect::new(0, 0, 200, 40));
        assert_eq!(wide.width, 120);
        assert_eq!(wide.x + wide.width, 200);
        let narrow = drawer_area(Rect::new(0, 0, 30, 10));
        assert_eq!(narrow, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn wrapped_height_counts_wrapped_rows() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 10), 5);
        assert_eq!(wrapped_height(&lines, 0), 29);
    }
}
