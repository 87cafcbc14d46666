use tokio::sync::mpsc;

use crate::sources::{self, FetchConfig};
use crate::state::{QueryInput, SearchResults};

/// What: Spawn background worker for search queries.
///
/// Inputs:
/// - `query_rx`: Channel receiver for search queries
/// - `search_result_tx`: Channel sender for search results
/// - `config`: Server location and timeout
///
/// Details:
/// - Every query gets its own task and its own HTTP request; there is no
///   debounce and no cancellation, so responses may arrive out of order.
/// - Each response echoes the query id and page; the event loop decides
///   whether it is still current.
/// - The worker stops when the query channel closes.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    search_result_tx: mpsc::UnboundedSender<SearchResults>,
    config: FetchConfig,
) {
    let client = config.client();
    tokio::spawn(async move {
        while let Some(input) = query_rx.recv().await {
            let tx = search_result_tx.clone();
            let client = client.clone();
            let cfg = config.clone();
            tokio::spawn(async move {
                let QueryInput { id, page, query } = input;
                let outcome = sources::fetch_recipes(&client, &cfg, &query).await;
                if let Err(e) = &outcome {
                    tracing::warn!(id, page, error = %e, "search request failed");
                }
                if tx.send(SearchResults { id, page, outcome }).is_err() {
                    tracing::debug!(id, "event loop gone; dropping search result");
                }
            });
        }
        tracing::debug!("search worker stopped");
    });
}
