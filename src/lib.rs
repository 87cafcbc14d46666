//! Library entry for the recipe browser exposing the view-state controller,
//! HTTP access, and TUI pieces for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
