//! View state for the recipe browser.
//!
//! `types` holds plain value types, `cache` the ordered result cache, and
//! `app_state` the single owning container mutated by the controller.

pub mod app_state;
pub mod cache;
pub mod types;

pub use app_state::AppState;
pub use cache::ResultCache;
pub use types::{
    Control, DEFAULT_PAGE_SIZE, DetailView, FetchError, FilterField, FilterState, Focus, HitRect,
    ListView, PageStatus, Query, QueryInput, Recipe, SearchResults, SelectionError, rect_contains,
};
