//! Core non-UI logic: query building, pagination, and selection.

/// Record-to-view projection for the table and drawer.
pub mod detail;
/// Page cursor moves and response reconciliation.
pub mod pagination;
/// Query building and dispatch.
pub mod query;
/// Row selection and drawer state.
pub mod selection;

// Re-export public APIs so callers can use `crate::logic::...`
pub use detail::{NUTRIENT_KEYS, ROW_HEADERS, project_detail, project_row};
pub use pagination::{
    SearchDisposition, apply_filters, handle_search_results, next_page, prev_page, reset_filters,
};
pub use query::{build_query, parse_page_size, send_query};
pub use selection::{
    close_detail, move_highlight, scroll_detail, select_row, toggle_total_time_panel,
};
