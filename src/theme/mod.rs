//! Settings and palette for the recipe browser.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and management.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    SETTINGS_SKELETON_CONTENT, ensure_settings_file, load_settings_from, parse_settings, settings,
};
pub use types::{DEFAULT_SERVER_URL, Settings, Theme};

/// Return the application's theme palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme::mocha()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
