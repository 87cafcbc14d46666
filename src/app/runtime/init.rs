use crate::app::runtime::RunOptions;
use crate::state::AppState;

/// What: Build the initial application state for a run.
///
/// Inputs:
/// - `options`: Effective settings, starting filters, and starting page
///
/// Output:
/// - `AppState` at `Idle(page)` configured from settings, with the starting filters applied.
///
/// Details:
/// - The reset target (`default_page_size`) comes from settings even when the
///   starting filters carry a different page size.
#[must_use]
pub fn initialize_app_state(options: RunOptions) -> AppState {
    let mut app = AppState::from_settings(&options.settings);
    app.filters = options.filters;
    app.page = options.page.max(1);
    app.page_label = app.page;
    tracing::info!(
        server = %app.server_url,
        page = app.page,
        page_size = app.filters.effective_page_size(),
        discard_stale = app.discard_stale_responses,
        rollback_on_error = app.rollback_page_on_error,
        "initialized application state"
    );
    app
}
