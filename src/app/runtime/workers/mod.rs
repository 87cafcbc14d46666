//! Background workers feeding the event loop.

/// Terminal event reader thread.
pub mod events;
/// Recipe search worker.
pub mod search;

pub use events::spawn_event_thread;
pub use search::spawn_search_worker;
