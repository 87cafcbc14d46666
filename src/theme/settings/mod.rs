use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::paths::{SETTINGS_FILE, config_dir, resolve_settings_config_path};
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod parse_settings;

pub use parse_settings::parse_settings;

/// Commented skeleton written when no settings file exists yet.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# recipe-browser settings
# Lines are `key = value`; `#` starts a comment.

# Base URL of the recipe server
server_url = http://127.0.0.1:5000

# Page size used at startup and restored by Ctrl+R
default_page_size = 50

# Whole-request timeout in seconds (0 disables it)
request_timeout_secs = 30

# Drop responses from superseded requests (quick page turns)
discard_stale_responses = true

# Move back a page when a page turn fails
rollback_page_on_error = false

# Show the key hints line
show_keybinds_footer = true
";

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: Settings file to read.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf missing or unreadable, using defaults"
            );
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(
        || {
            debug!("[Config] no settings.conf found, using defaults");
            Settings::default()
        },
        |p| load_settings_from(&p),
    )
}

/// What: Write the commented settings skeleton when no settings file exists.
///
/// Output:
/// - `Some(path)` when a new file was written; `None` if one already existed or writing failed.
///
/// Details:
/// - The file goes into [`config_dir`], the same directory that holds the logs.
pub fn ensure_settings_file() -> Option<PathBuf> {
    if resolve_settings_config_path().is_some() {
        return None;
    }
    let target = config_dir().join(SETTINGS_FILE);
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            debug!(path = %target.display(), "[Config] wrote settings skeleton");
            Some(target)
        }
        Err(e) => {
            warn!(path = %target.display(), error = %e, "[Config] failed to write settings skeleton");
            None
        }
    }
}
