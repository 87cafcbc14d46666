use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{QueryInput, SearchResults};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the event loop, the
///   terminal event thread, and the search worker. The worker's query
///   receiver is handed out once by [`Channels::new`].
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`, polled by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Worker responses.
    pub search_result_tx: mpsc::UnboundedSender<SearchResults>,
    /// Receiving side of `search_result_tx`, polled by the event loop.
    pub results_rx: mpsc::UnboundedReceiver<SearchResults>,
    /// Queries dispatched by the controller.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
}

impl Channels {
    /// What: Create all channels used for runtime communication.
    ///
    /// Output:
    /// - The `Channels` bundle plus the query receiver for the search worker.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<QueryInput>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (search_result_tx, results_rx) = mpsc::unbounded_channel::<SearchResults>();
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        (
            Self {
                event_tx,
                event_rx,
                event_thread_cancelled,
                search_result_tx,
                results_rx,
                query_tx,
            },
            query_rx,
        )
    }
}
