//! Tests for key and mouse mapping onto controller operations.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

use super::{handle_event, next_focus, prev_focus};
use crate::state::{Control, FilterField, Focus, QueryInput};
use crate::test_utils::{app_with_table, new_app};

fn key(code: KeyCode) -> CEvent {
    key_mod(code, KeyModifiers::empty())
}

fn key_mod(code: KeyCode, modifiers: KeyModifiers) -> CEvent {
    CEvent::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

fn click(column: u16, row: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn drain(rx: &mut mpsc::UnboundedReceiver<QueryInput>) -> Vec<QueryInput> {
    let mut out = Vec::new();
    while let Ok(q) = rx.try_recv() {
        out.push(q);
    }
    out
}

#[test]
/// What: Typing edits the focused filter and Enter applies it from page 1.
///
/// Inputs:
/// - Title focused; type "soup"; press Enter while the cursor is on page 4.
///
/// Output:
/// - No query until Enter; then one query `page=1&limit=50&title=soup`.
fn typing_then_enter_applies_filters() {
    let mut app = new_app();
    app.page = 4;
    let (tx, mut rx) = mpsc::unbounded_channel();
    for c in "soup".chars() {
        assert!(!handle_event(key(KeyCode::Char(c)), &mut app, &tx));
    }
    assert_eq!(app.filters.title, "soup");
    assert!(drain(&mut rx).is_empty());
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].query.to_query_string(),
        "page=1&limit=50&title=soup"
    );
    assert_eq!(app.page, 1);
}

#[test]
fn backspace_and_ctrl_u_edit_field() {
    let mut app = new_app();
    app.focus = Focus::Filter(FilterField::Cuisine);
    app.filters.cuisine = "Thai".into();
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(key(KeyCode::Backspace), &mut app, &tx);
    assert_eq!(app.filters.cuisine, "Tha");
    handle_event(key_mod(KeyCode::Char('u'), KeyModifiers::CONTROL), &mut app, &tx);
    assert!(app.filters.cuisine.is_empty());
}

#[test]
/// What: Tab and Shift+Tab walk the focus ring and wrap.
fn focus_ring_wraps() {
    assert_eq!(next_focus(Focus::Results), Focus::Filter(FilterField::Title));
    assert_eq!(prev_focus(Focus::Filter(FilterField::Title)), Focus::Results);
    let mut app = new_app();
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(key(KeyCode::Tab), &mut app, &tx);
    assert_eq!(app.focus, Focus::Filter(FilterField::Cuisine));
    handle_event(key(KeyCode::BackTab), &mut app, &tx);
    handle_event(key(KeyCode::BackTab), &mut app, &tx);
    assert_eq!(app.focus, Focus::Results);
}

#[test]
/// What: Ctrl+R resets filters from any pane and dispatches page 1.
fn ctrl_r_resets() {
    let mut app = app_with_table(3);
    app.focus = Focus::Results;
    app.filters.serves = "4".into();
    app.page = 3;
    let (tx, mut rx) = mpsc::unbounded_channel();
    handle_event(key_mod(KeyCode::Char('r'), KeyModifiers::CONTROL), &mut app, &tx);
    assert!(app.filters.serves.is_empty());
    assert_eq!(app.page, 1);
    assert_eq!(drain(&mut rx)[0].query.to_query_string(), "page=1&limit=50");
}

#[test]
/// What: Page keys on the results pane move the cursor; Left on page 1 is ignored.
///
/// Inputs:
/// - Results focused on page 1; press Left, then Right, then `p`.
///
/// Output:
/// - Queries for page 2 then page 1; nothing for the first Left.
fn page_keys_turn_pages() {
    let mut app = app_with_table(3);
    app.focus = Focus::Results;
    let (tx, mut rx) = mpsc::unbounded_channel();
    handle_event(key(KeyCode::Left), &mut app, &tx);
    assert!(drain(&mut rx).is_empty());
    handle_event(key(KeyCode::Right), &mut app, &tx);
    handle_event(key(KeyCode::Char('p')), &mut app, &tx);
    let pages: Vec<u32> = drain(&mut rx).iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![2, 1]);
}

#[test]
/// What: Enter opens the drawer, which then captures keys until closed.
///
/// Inputs:
/// - Highlight row 1, press Enter, then Right (ignored), `t`, and Esc.
///
/// Output:
/// - Drawer shows row 1; no page turn while open; panel toggled; drawer closed.
fn enter_opens_modal_drawer() {
    let mut app = app_with_table(3);
    app.focus = Focus::Results;
    let (tx, mut rx) = mpsc::unbounded_channel();
    handle_event(key(KeyCode::Down), &mut app, &tx);
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(
        app.detail.as_ref().map(crate::state::DetailView::heading),
        Some("Recipe 1 - Test Kitchen".to_string())
    );
    handle_event(key(KeyCode::Right), &mut app, &tx);
    assert!(drain(&mut rx).is_empty());
    handle_event(key(KeyCode::Char('t')), &mut app, &tx);
    assert!(app.total_time_expanded);
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app, &tx));
    assert!(app.detail.is_none());
}

#[test]
fn quit_keys() {
    let mut app = app_with_table(1);
    let (tx, _rx) = mpsc::unbounded_channel();
    assert!(handle_event(
        key_mod(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut app,
        &tx
    ));
    // `q` types into a filter rather than quitting
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app, &tx));
    app.focus = Focus::Results;
    assert!(handle_event(key(KeyCode::Char('q')), &mut app, &tx));
}

#[test]
/// What: A click maps to the row under the pointer, including the scroll offset.
///
/// Inputs:
/// - Table body at y=10 with offset 5; click line y=12.
///
/// Output:
/// - Drawer opens for cache row 7; a click below the last row is a no-op.
fn click_selects_row_with_offset() {
    let mut app = app_with_table(8);
    app.results_rect = Some((0, 10, 80, 10));
    *app.table_state.offset_mut() = 5;
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(click(4, 12), &mut app, &tx);
    assert_eq!(app.focus, Focus::Results);
    assert_eq!(
        app.detail.as_ref().map(|d| d.title.clone()),
        Some("Recipe 7".to_string())
    );
    app.detail = None;
    handle_event(click(4, 15), &mut app, &tx);
    assert!(app.detail.is_none());
}

#[test]
/// What: Clicks on the drawer header toggle the panel; clicks outside close the drawer.
fn drawer_mouse_behavior() {
    let mut app = app_with_table(2);
    crate::logic::select_row(&mut app, 0).expect("row exists");
    app.drawer_rect = Some((40, 0, 40, 20));
    app.total_time_rect = Some((41, 1, 38, 1));
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(click(50, 1), &mut app, &tx);
    assert!(app.total_time_expanded);
    handle_event(click(50, 5), &mut app, &tx);
    assert!(app.detail.is_some());
    handle_event(click(10, 5), &mut app, &tx);
    assert!(app.detail.is_none());
}

#[test]
/// What: Buttons and filter inputs respond to clicks.
fn buttons_and_filters_clickable() {
    let mut app = app_with_table(2);
    app.control_rects = vec![(Control::Next, (30, 3, 6, 1))];
    app.filter_rects = vec![(FilterField::Rating, (0, 0, 10, 3))];
    let (tx, mut rx) = mpsc::unbounded_channel();
    handle_event(click(32, 3), &mut app, &tx);
    assert_eq!(drain(&mut rx)[0].page, 2);
    handle_event(click(2, 1), &mut app, &tx);
    assert_eq!(app.focus, Focus::Filter(FilterField::Rating));
}

#[test]
fn key_release_is_ignored() {
    let mut app = new_app();
    let (tx, _rx) = mpsc::unbounded_channel();
    let ev = CEvent::Key(KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    });
    assert!(!handle_event(ev, &mut app, &tx));
    assert!(app.filters.title.is_empty());
}
