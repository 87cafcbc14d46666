//! Row selection and detail-drawer state changes.

use crate::logic::detail::project_detail;
use crate::state::{AppState, SelectionError};

/// What: Open the detail drawer for the record rendered at `position`.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `position`: Zero-based row in the rendered table
///
/// Output:
/// - `Ok(())` when the drawer now shows that record.
///
/// # Errors
/// - `IndexOutOfRange` when no table is shown or `position` is past the cached rows;
///   the state is left unchanged.
///
/// Details:
/// - Lookup is purely positional against the result cache, which the table renders in order.
/// - Opening resets the drawer scroll; the total-time panel keeps its last toggle.
pub fn select_row(app: &mut AppState, position: usize) -> Result<(), SelectionError> {
    if !app.rows_selectable() {
        tracing::debug!(position, "row selection ignored; no table rendered");
        return Err(SelectionError::IndexOutOfRange {
            index: position,
            len: 0,
        });
    }
    let recipe = app.cache.select_by_position(position).inspect_err(|e| {
        tracing::debug!(error = %e, "row selection out of range");
    })?;
    let view = project_detail(recipe);
    tracing::debug!(position, title = %view.title, "opening detail drawer");
    app.table_state.select(Some(position));
    app.detail = Some(view);
    app.detail_scroll = 0;
    Ok(())
}

/// What: Move the results highlight by `delta` rows, clamped to the cached range.
pub fn move_highlight(app: &mut AppState, delta: isize) {
    if !app.rows_selectable() {
        return;
    }
    let last = app.cache.len() - 1;
    let current = app.table_state.selected().unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(last);
    app.table_state.select(Some(next));
}

/// Close the detail drawer.
pub fn close_detail(app: &mut AppState) {
    app.detail = None;
    app.detail_scroll = 0;
}

/// Flip the expandable total-time panel in the drawer.
pub const fn toggle_total_time_panel(app: &mut AppState) {
    app.total_time_expanded = !app.total_time_expanded;
}

/// Scroll the drawer body by `delta` lines, stopping at the last drawn line.
pub const fn scroll_detail(app: &mut AppState, delta: i16) {
    let next = app.detail_scroll.saturating_add_signed(delta);
    app.detail_scroll = if next > app.detail_max_scroll {
        app.detail_max_scroll
    } else {
        next
    };
}
