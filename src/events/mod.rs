//! Event handling layer for the recipe browser TUI.
//!
//! `handle_event` maps crossterm events onto the controller operations in
//! [`crate::logic`]. The drawer is modal: while it is open, keys go to it first.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::reset_filters;
use crate::state::{AppState, FilterField, Focus, QueryInput};

mod drawer;
mod filters;
mod mouse;
mod results;

#[cfg(test)]
mod tests;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, app, query_tx),
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app, query_tx),
        _ => false,
    }
}

/// What: Route a key press to the global shortcuts, the drawer, or the focused pane.
///
/// Output:
/// - `true` when the key requests exit.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(ke.code, KeyCode::Char('c' | 'C')) {
        return true;
    }
    if app.detail.is_some() {
        drawer::handle_drawer_key(ke, app);
        return false;
    }
    if ctrl && matches!(ke.code, KeyCode::Char('r' | 'R')) {
        tracing::debug!("reset requested from keyboard");
        reset_filters(app, query_tx);
        return false;
    }
    match ke.code {
        KeyCode::Tab => {
            app.focus = next_focus(app.focus);
            return false;
        }
        KeyCode::BackTab => {
            app.focus = prev_focus(app.focus);
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Filter(field) => {
            filters::handle_filter_key(ke, app, field, query_tx);
            false
        }
        Focus::Results => results::handle_results_key(ke, app, query_tx),
    }
}

/// Focus order: the filter fields left to right, then the results pane.
const fn focus_ring() -> [Focus; 7] {
    [
        Focus::Filter(FilterField::Title),
        Focus::Filter(FilterField::Cuisine),
        Focus::Filter(FilterField::Rating),
        Focus::Filter(FilterField::TotalTime),
        Focus::Filter(FilterField::Serves),
        Focus::Filter(FilterField::PageSize),
        Focus::Results,
    ]
}

/// Next entry of the focus ring, wrapping around.
#[must_use]
pub fn next_focus(current: Focus) -> Focus {
    let ring = focus_ring();
    let i = ring.iter().position(|f| *f == current).unwrap_or(0);
    ring[(i + 1) % ring.len()]
}

/// Previous entry of the focus ring, wrapping around.
#[must_use]
pub fn prev_focus(current: Focus) -> Focus {
    let ring = focus_ring();
    let i = ring.iter().position(|f| *f == current).unwrap_or(0);
    ring[(i + ring.len() - 1) % ring.len()]
}
