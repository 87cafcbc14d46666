//! Implementation methods for `AppState`.

use crate::state::app_state::AppState;
use crate::state::types::{FilterState, ListView};
use crate::theme::Settings;

impl AppState {
    /// What: Build a fresh state configured from user settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings (server URL, default page size, behavior switches).
    ///
    /// Output:
    /// - `AppState` at `Idle(1)` with empty filters and the configured default page size.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let mut app = Self::default();
        app.apply_settings(settings);
        app.filters = FilterState::with_page_size(&app.default_page_size);
        app
    }

    /// What: Copy behavior switches and defaults from settings into the state.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings.
    ///
    /// Details:
    /// - Does not touch the current filters; only the value restored on reset changes.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.default_page_size = settings.default_page_size.to_string();
        self.discard_stale_responses = settings.discard_stale_responses;
        self.rollback_page_on_error = settings.rollback_page_on_error;
        self.show_keybinds_footer = settings.show_keybinds_footer;
        self.server_url.clone_from(&settings.server_url);
    }

    /// `true` when the table is rendered and rows can be selected.
    #[must_use]
    pub fn rows_selectable(&self) -> bool {
        self.list_view == ListView::Table && !self.cache.is_empty()
    }

    /// Highlighted row in the results table, if any.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        if self.rows_selectable() {
            self.table_state.selected()
        } else {
            None
        }
    }
}
