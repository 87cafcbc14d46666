use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{
    apply_filters, close_detail, move_highlight, next_page, prev_page, reset_filters,
    scroll_detail, select_row, toggle_total_time_panel,
};
use crate::state::{AppState, Control, Focus, QueryInput, rect_contains};

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Mutable application state (hit-test rects from the last draw)
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Drawer first: a click on the total-time header toggles the panel, a click
///   outside the drawer closes it, and the wheel scrolls it.
/// - Otherwise clicks focus filters, press buttons, or select a results row.
/// - Row mapping adds the table scroll offset to the clicked line.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    if app.detail.is_some() {
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if app.total_time_rect.is_some_and(|r| rect_contains(r, mx, my)) {
                    toggle_total_time_panel(app);
                } else if !app.drawer_rect.is_some_and(|r| rect_contains(r, mx, my)) {
                    close_detail(app);
                }
            }
            MouseEventKind::ScrollUp => scroll_detail(app, -1),
            MouseEventKind::ScrollDown => scroll_detail(app, 1),
            _ => {}
        }
        return false;
    }

    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let field = app
                .filter_rects
                .iter()
                .find(|(_, r)| rect_contains(*r, mx, my))
                .map(|(f, _)| *f);
            let control = app
                .control_rects
                .iter()
                .find(|(_, r)| rect_contains(*r, mx, my))
                .map(|(c, _)| *c);
            if let Some(field) = field {
                app.focus = Focus::Filter(field);
            } else if let Some(control) = control {
                press_control(control, app, query_tx);
            } else if let Some(row) = row_at(app, mx, my) {
                app.focus = Focus::Results;
                if let Err(e) = select_row(app, row) {
                    tracing::debug!(error = %e, "click below the last row ignored");
                }
            }
        }
        MouseEventKind::ScrollUp if row_at(app, mx, my).is_some() => move_highlight(app, -1),
        MouseEventKind::ScrollDown if row_at(app, mx, my).is_some() => move_highlight(app, 1),
        _ => {}
    }
    false
}

/// Run the controller operation behind a clicked button.
fn press_control(
    control: Control,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    tracing::debug!(?control, "button pressed");
    match control {
        Control::Apply => apply_filters(app, query_tx),
        Control::Reset => reset_filters(app, query_tx),
        Control::Prev => {
            prev_page(app, query_tx);
        }
        Control::Next => next_page(app, query_tx),
    }
}

/// What: Map a screen position to a results row (cache position).
///
/// Output:
/// - `Some(row)` when the position is inside the table body; the row may still
///   be past the last record when the table is shorter than the pane.
fn row_at(app: &AppState, mx: u16, my: u16) -> Option<usize> {
    let rect = app.results_rect?;
    if !rect_contains(rect, mx, my) {
        return None;
    }
    Some(app.table_state.offset() + usize::from(my - rect.1))
}
