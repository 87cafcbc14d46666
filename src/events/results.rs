use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{move_highlight, next_page, prev_page, select_row};
use crate::state::{AppState, FilterField, Focus, QueryInput};

/// Rows moved by Home/End; clamped to the table anyway.
const JUMP: isize = 10_000;

/// What: Handle a key while the results pane has focus.
///
/// Output:
/// - `true` when `q` requests exit.
///
/// Details:
/// - Up/Down and `k`/`j` move the highlight; Enter opens the drawer for it.
/// - Left/`p`/PageUp and Right/`n`/PageDown turn pages.
/// - `/` jumps to the title filter.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => move_highlight(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_highlight(app, 1),
        KeyCode::Home => move_highlight(app, -JUMP),
        KeyCode::End => move_highlight(app, JUMP),
        KeyCode::Enter => {
            if let Some(row) = app.highlighted_row() {
                let _ = select_row(app, row);
            }
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
            prev_page(app, query_tx);
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => next_page(app, query_tx),
        KeyCode::Char('/') => app.focus = Focus::Filter(FilterField::Title),
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}
