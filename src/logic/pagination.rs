//! Pagination controller: the only writer of the page cursor.
//!
//! User actions move the cursor and dispatch a query; worker responses are
//! reconciled here, including the empty-page rollback and the stale-response
//! check.

use tokio::sync::mpsc;

use crate::logic::query::send_query;
use crate::state::{AppState, FilterState, ListView, PageStatus, QueryInput, SearchResults};

/// Message shown in the results area when a request fails.
pub const FAILED_MESSAGE: &str = "Failed to load recipes. Please try again.";
/// Message shown in the results area when a page has no records.
pub const EMPTY_MESSAGE: &str =
    "No recipes found matching your criteria. Please try different filters.";

/// How a worker response was reconciled with the view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDisposition {
    /// Response belonged to a superseded query and was dropped.
    Stale,
    /// Records were cached and the table rendered.
    Rendered {
        /// Number of records cached.
        records: usize,
    },
    /// Empty page after the first; cursor moved back to `to`.
    RolledBack {
        /// Page the cursor now points at.
        to: u32,
    },
    /// Empty first page; fallback rendered, cursor unchanged.
    Empty,
    /// Request failed; error fallback rendered.
    Failed,
}

/// What: Apply the current filters starting from the first page.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Cursor set to 1 and a query dispatched (`Loading(1)`).
pub fn apply_filters(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.page = 1;
    send_query(app, query_tx);
}

/// What: Clear every filter, restore the default page size, and reload the first page.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the search worker
///
/// Details:
/// - Idempotent with respect to filters and the resulting query.
pub fn reset_filters(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.filters = FilterState::with_page_size(&app.default_page_size);
    app.page = 1;
    send_query(app, query_tx);
}

/// What: Move to the previous page when there is one.
///
/// Output:
/// - `true` if the cursor moved and a query was dispatched; `false` on page 1.
pub fn prev_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    if app.page <= 1 {
        return false;
    }
    app.page -= 1;
    send_query(app, query_tx);
    true
}

/// What: Move to the next page.
///
/// Details:
/// - Always allowed: the server does not report a total, so the end of the
///   collection is only discovered by an empty response.
pub fn next_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.page = app.page.saturating_add(1);
    send_query(app, query_tx);
}

/// What: Reconcile a worker response with the view state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `results`: Response tagged with the id of its originating query
///
/// Output:
/// - How the response was handled.
///
/// Details:
/// - Responses whose id is not the latest dispatched id are dropped unless
///   `discard_stale_responses` is off.
/// - Non-empty success: cache replaced, table rendered, `Idle(page)`.
/// - Empty success: cache cleared and fallback rendered; on pages after the
///   first the cursor and indicator move back by one.
/// - Failure: `Error(page)` with the error fallback; the cursor only moves back
///   when `rollback_page_on_error` is set.
pub fn handle_search_results(app: &mut AppState, results: SearchResults) -> SearchDisposition {
    if results.id != app.latest_query_id {
        if app.discard_stale_responses {
            tracing::debug!(
                id = results.id,
                latest = app.latest_query_id,
                page = results.page,
                "discarding stale search response"
            );
            return SearchDisposition::Stale;
        }
        tracing::warn!(
            id = results.id,
            latest = app.latest_query_id,
            "applying out-of-order search response"
        );
    }
    match results.outcome {
        Ok(records) if records.is_empty() => {
            app.cache.publish(results.id, Vec::new());
            app.table_state.select(None);
            app.list_view = ListView::Empty;
            app.status = PageStatus::Idle;
            if app.page > 1 {
                app.page -= 1;
                app.page_label = app.page;
                tracing::info!(page = app.page, "empty page; moved cursor back");
                SearchDisposition::RolledBack { to: app.page }
            } else {
                tracing::info!("no recipes matched on the first page");
                SearchDisposition::Empty
            }
        }
        Ok(records) => {
            let count = records.len();
            app.cache.publish(results.id, records);
            *app.table_state.offset_mut() = 0;
            app.table_state.select(Some(0));
            app.list_view = ListView::Table;
            app.status = PageStatus::Idle;
            tracing::info!(page = app.page, records = count, "rendered search results");
            SearchDisposition::Rendered { records: count }
        }
        Err(err) => {
            tracing::warn!(page = app.page, error = %err, "search request failed");
            app.status = PageStatus::Error;
            app.list_view = ListView::Error(format!("{FAILED_MESSAGE} ({err})"));
            if app.rollback_page_on_error && app.page > 1 {
                app.page -= 1;
                app.page_label = app.page;
            }
            SearchDisposition::Failed
        }
    }
}
