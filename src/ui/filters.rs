use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    prelude::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, FilterField, Focus};
use crate::theme::theme;
use crate::ui::helpers::{hit_rect, tail_to_width, width_u16};

/// Relative widths of the filter inputs, in [`FilterField::ALL`] order.
const FIELD_WEIGHTS: [u16; 6] = [4, 3, 2, 2, 2, 2];

/// What: Render the filter bar and record each input's rect for mouse focus.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (filters, focus)
/// - `area`: Target rectangle (three rows high)
///
/// Output:
/// - Draws one bordered input per filter; places the terminal cursor in the focused one.
pub fn render_filters(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::horizontal(FIELD_WEIGHTS.map(Constraint::Fill)).split(area);
    app.filter_rects.clear();
    for (field, rect) in FilterField::ALL.into_iter().zip(chunks.iter().copied()) {
        let focused = app.focus == Focus::Filter(field);
        let border = if focused { th.sapphire } else { th.surface1 };
        let label_style = if focused {
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        let inner_w = usize::from(rect.width.saturating_sub(2));
        let shown = tail_to_width(app.filters.field(field), inner_w.saturating_sub(1));
        let input = Paragraph::new(shown.to_string())
            .style(Style::default().fg(th.text).bg(th.base))
            .block(
                Block::default()
                    .title(Span::styled(format!(" {} ", field.label()), label_style))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(input, rect);
        if focused && rect.width > 2 && rect.height > 2 {
            let x = rect.x + 1 + width_u16(shown).min(rect.width - 3);
            f.set_cursor_position(Position { x, y: rect.y + 1 });
        }
        app.filter_rects.push((field, hit_rect(rect)));
    }
}
