use std::env;
use std::path::PathBuf;

/// Directory name used under each config base.
pub(crate) const APP_DIR: &str = "recipe-browser";
/// File name of the user settings.
pub(crate) const SETTINGS_FILE: &str = "settings.conf";

/// Read a path-like environment variable, treating blank values as unset.
fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|v| !v.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

/// What: List the app config directories in lookup order.
///
/// Output:
/// - `$HOME/.config/recipe-browser` then `$XDG_CONFIG_HOME/recipe-browser`,
///   skipping unset variables and duplicates.
fn config_candidates() -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::with_capacity(2);
    let bases = [
        env_path("HOME").map(|h| h.join(".config")),
        env_path("XDG_CONFIG_HOME"),
    ];
    for base in bases.into_iter().flatten() {
        let dir = base.join(APP_DIR);
        if !out.contains(&dir) {
            out.push(dir);
        }
    }
    out
}

/// First existing `settings.conf` among the config candidates.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    config_candidates()
        .into_iter()
        .map(|d| d.join(SETTINGS_FILE))
        .find(|p| p.is_file())
}

/// What: Config directory for the app, created on demand.
///
/// Output:
/// - The first candidate that could be created; `./recipe-browser` when neither
///   HOME nor `XDG_CONFIG_HOME` is usable.
#[must_use]
pub fn config_dir() -> PathBuf {
    for dir in config_candidates() {
        match std::fs::create_dir_all(&dir) {
            Ok(()) => return dir,
            Err(e) => tracing::debug!(path = %dir.display(), error = %e, "[Config] config dir unusable"),
        }
    }
    PathBuf::from(APP_DIR)
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Config and log directories live under `$HOME/.config/recipe-browser`,
    /// and the settings file is found there once it exists.
    fn paths_config_and_logs_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::set_var("XDG_CONFIG_HOME", "  ");
        }
        let cfg = config_dir();
        let logs = logs_dir();
        assert!(cfg.ends_with(".config/recipe-browser"));
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert_eq!(config_candidates(), vec![cfg.clone()]);
        assert_eq!(resolve_settings_config_path(), None);
        std::fs::write(cfg.join(SETTINGS_FILE), "").expect("write");
        assert_eq!(resolve_settings_config_path(), Some(cfg.join(SETTINGS_FILE)));
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
