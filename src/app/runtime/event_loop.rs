use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::app::runtime::channels::Channels;
use crate::logic::{SearchDisposition, handle_search_results};
use crate::state::AppState;
use crate::ui::ui;

/// Terminal type driven by the runtime.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// What: Drive rendering and message handling until exit is requested.
///
/// Inputs:
/// - `app`: Application state owned by this loop
/// - `channels`: Event and result channels
/// - `terminal`: Terminal to draw into; `None` in headless runs
///
/// Details:
/// - Redraws before waiting for the next message, so every handled message is
///   reflected on screen.
/// - Terminal events and worker results are serialized here; nothing else
///   mutates `app`.
pub async fn run_event_loop(
    app: &mut AppState,
    channels: &mut Channels,
    mut terminal: Option<&mut Term>,
) {
    loop {
        if let Some(t) = terminal.as_deref_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, &channels.query_tx) {
                    tracing::debug!("[Runtime] exit requested");
                    break;
                }
            }
            Some(results) = channels.results_rx.recv() => {
                let disposition = handle_search_results(app, results);
                if disposition != SearchDisposition::Stale {
                    tracing::trace!(?disposition, "[Runtime] applied search results");
                }
            }
            else => break,
        }
    }
}
