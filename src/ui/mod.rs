//! Ratatui rendering of the recipe browser.
//!
//! Renderers only read controller state; the one exception is the geometry
//! they record (`results_rect`, `filter_rects`, ...) for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

/// Button row under the filter bar.
mod controls;
/// Detail drawer overlay.
pub mod details;
/// Filter input bar.
mod filters;
/// Status and key hints.
mod footer;
/// Width-aware text helpers.
pub mod helpers;
/// Results table and fallbacks.
mod results;

/// What: Draw the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; hit-test rects are refreshed as a side effect
///
/// Output:
/// - Filter bar, button row, results pane, footer, and the drawer when open.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let [filter_area, controls_area, results_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(footer::footer_height(app)),
    ])
    .areas(area);

    filters::render_filters(f, app, filter_area);
    controls::render_controls(f, app, controls_area);
    results::render_results(f, app, results_area);
    footer::render_footer(f, app, footer_area);
    details::render_drawer(f, app, area);
}
