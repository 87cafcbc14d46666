//! Application runtime: terminal lifecycle, event loop, and background workers.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run};
