use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{close_detail, scroll_detail, toggle_total_time_panel};
use crate::state::AppState;

/// Lines scrolled by PageUp/PageDown in the drawer.
const PAGE_SCROLL: i16 = 10;

/// Handle a key while the detail drawer is open; other panes see nothing.
pub fn handle_drawer_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => close_detail(app),
        KeyCode::Char('t') => toggle_total_time_panel(app),
        KeyCode::Up | KeyCode::Char('k') => scroll_detail(app, -1),
        KeyCode::Down | KeyCode::Char('j') => scroll_detail(app, 1),
        KeyCode::PageUp => scroll_detail(app, -PAGE_SCROLL),
        KeyCode::PageDown => scroll_detail(app, PAGE_SCROLL),
        _ => {}
    }
}
