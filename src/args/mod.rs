//! Command-line argument parsing and handling.

pub mod definition;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, Mode};
pub use search::{format_recipe_details, format_results_table, handle_lookup, handle_search};
pub use utils::{apply_overrides, determine_log_level, initial_filters};
