use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::apply_filters;
use crate::state::{AppState, FilterField, Focus, QueryInput};

/// What: Handle a key while a filter input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `field`: Focused filter field
/// - `query_tx`: Channel to the search worker
///
/// Details:
/// - Printable characters edit the field; Enter applies the filters from page 1.
/// - Ctrl+U clears the field; Down or Esc moves focus to the results.
/// - Edits never dispatch a query on their own.
pub fn handle_filter_key(
    ke: KeyEvent,
    app: &mut AppState,
    field: FilterField,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Enter => {
            tracing::debug!(field = field.label(), "applying filters");
            apply_filters(app, query_tx);
        }
        KeyCode::Char('u') if ctrl => app.filters.field_mut(field).clear(),
        KeyCode::Char(c) if !ctrl && !ke.modifiers.contains(KeyModifiers::ALT) => {
            app.filters.field_mut(field).push(c);
        }
        KeyCode::Backspace => {
            app.filters.field_mut(field).pop();
        }
        KeyCode::Down | KeyCode::Esc => app.focus = Focus::Results,
        _ => {}
    }
}
