use ratatui::{
    Frame,
    layout::{Alignment, Constraint},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::logic::pagination::EMPTY_MESSAGE;
use crate::logic::{ROW_HEADERS, project_row};
use crate::state::{AppState, Focus, ListView, PageStatus};
use crate::theme::theme;
use crate::ui::helpers::hit_rect;

/// Column widths of the results table, in [`ROW_HEADERS`] order.
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Fill(4),
    Constraint::Fill(2),
    Constraint::Length(7),
    Constraint::Length(11),
    Constraint::Length(12),
];

/// What: Render the results area: the table, or the pending/empty/error fallback.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (list view, cache, table state)
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the results pane and records the table body rect for click-to-row mapping.
///
/// Details:
/// - Rows are built by iterating the cache in order, so row `i` is `cache[i]`.
/// - While a request is in flight the previous table stays visible with a loading title.
/// - The last dispatched query string sits on the bottom border.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let title = match app.status {
        PageStatus::Loading => format!(" Recipes · page {} · loading… ", app.page_label),
        _ => format!(" Recipes · page {} ", app.page_label),
    };
    let mut block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.mauve)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface1 }));
    if let Some(q) = &app.last_query {
        block = block.title_bottom(Span::styled(
            format!(" {} ", q.to_query_string()),
            Style::default().fg(th.overlay1),
        ));
    }
    let inner = block.inner(area);

    match &app.list_view {
        ListView::Table => {
            let header = Row::new(ROW_HEADERS.map(Cell::from))
                .style(Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD));
            let rows = app
                .cache
                .records()
                .iter()
                .map(|r| Row::new(project_row(r).map(Cell::from)));
            let table = Table::new(rows, COLUMN_WIDTHS)
                .header(header)
                .block(block)
                .style(Style::default().fg(th.text).bg(th.base))
                .column_spacing(2)
                .row_highlight_style(
                    Style::default()
                        .fg(th.base)
                        .bg(th.sapphire)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            f.render_stateful_widget(table, area, &mut app.table_state);
            app.results_rect = (inner.height > 1).then(|| {
                hit_rect(Rect {
                    x: inner.x,
                    y: inner.y + 1,
                    width: inner.width,
                    height: inner.height - 1,
                })
            });
        }
        view => {
            let (text, color) = match view {
                ListView::Empty => (EMPTY_MESSAGE.to_string(), th.yellow),
                ListView::Error(msg) => (msg.clone(), th.red),
                _ if app.status == PageStatus::Loading => ("Loading recipes…".to_string(), th.yellow),
                _ => ("Press Enter in a filter to search.".to_string(), th.subtext0),
            };
            let p = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(th.base))
                .block(block);
            f.render_widget(p, area);
            app.results_rect = None;
        }
    }
}
