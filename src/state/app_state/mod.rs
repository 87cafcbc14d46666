//! Central `AppState` container owned by the event loop.

use ratatui::widgets::TableState;

use crate::state::cache::ResultCache;
use crate::state::types::{
    Control, DetailView, FilterField, FilterState, Focus, HitRect, ListView, PageStatus, Query,
};

mod methods;

/// Global view state shared by the event, controller, and UI layers.
///
/// All writes go through the controller functions in [`crate::logic`]; the
/// UI only reads. The page cursor and result cache are owned here and only
/// mutated on the event-loop task, so no locking is needed.
#[derive(Debug)]
pub struct AppState {
    // Filters
    /// Current filter inputs.
    pub filters: FilterState,
    /// Raw page size restored on reset.
    pub default_page_size: String,
    /// Which pane receives key input.
    pub focus: Focus,

    // Pagination controller
    /// Page cursor; never below 1.
    pub page: u32,
    /// Page number shown in the page indicator.
    pub page_label: u32,
    /// Controller phase for `page`.
    pub status: PageStatus,
    /// Last query dispatched to the worker, shown under the results table.
    pub last_query: Option<Query>,

    // Search coordination
    /// Identifier of the latest query whose results may be displayed.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,

    // Results
    /// What the results area shows.
    pub list_view: ListView,
    /// Records backing the table, in render order.
    pub cache: ResultCache,
    /// Highlighted row and scroll offset of the results table.
    pub table_state: TableState,
    /// Inner rectangle of the results table body `(x, y, width, height)` from the last draw.
    pub results_rect: Option<HitRect>,

    // Mouse hit-test rectangles from the last draw
    /// Filter inputs.
    pub filter_rects: Vec<(FilterField, HitRect)>,
    /// Apply/Reset/Previous/Next buttons.
    pub control_rects: Vec<(Control, HitRect)>,
    /// Detail drawer, when open.
    pub drawer_rect: Option<HitRect>,
    /// Header line of the expandable total-time panel.
    pub total_time_rect: Option<HitRect>,

    // Drawer
    /// Projected record shown in the detail drawer; `None` hides the drawer.
    pub detail: Option<DetailView>,
    /// Whether the expandable total-time panel in the drawer is open.
    pub total_time_expanded: bool,
    /// Vertical scroll of the drawer body.
    pub detail_scroll: u16,
    /// Largest useful `detail_scroll` for the last drawn drawer body.
    pub detail_max_scroll: u16,

    // Behavior switches (from settings)
    /// Drop responses whose id is not `latest_query_id`.
    pub discard_stale_responses: bool,
    /// Roll the page cursor back by one when a request fails.
    pub rollback_page_on_error: bool,
    /// Show the keybinds footer.
    pub show_keybinds_footer: bool,
    /// Base URL of the recipe server, shown in the title bar.
    pub server_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        let filters = FilterState::default();
        Self {
            default_page_size: filters.page_size.clone(),
            filters,
            focus: Focus::Filter(FilterField::Title),
            page: 1,
            page_label: 1,
            status: PageStatus::Idle,
            last_query: None,
            latest_query_id: 0,
            next_query_id: 1,
            list_view: ListView::Pending,
            cache: ResultCache::default(),
            table_state: TableState::default(),
            results_rect: None,
            filter_rects: Vec::new(),
            control_rects: Vec::new(),
            drawer_rect: None,
            total_time_rect: None,
            detail: None,
            total_time_expanded: false,
            detail_scroll: 0,
            detail_max_scroll: 0,
            discard_stale_responses: true,
            rollback_page_on_error: false,
            show_keybinds_footer: true,
            server_url: String::new(),
        }
    }
}
