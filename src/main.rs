//! Recipe browser binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use recipe_browser::app::{self, RunOptions};
use recipe_browser::args::{
    Args, Mode, apply_overrides, determine_log_level, handle_lookup, handle_search,
    initial_filters,
};
use recipe_browser::theme;

/// Log line timestamp in local time (`YYYY-MM-DD HH:MM:SS`).
struct BrowserTimer;

impl tracing_subscriber::fmt::time::FormatTime for BrowserTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to the requested level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `<config>/logs/recipe-browser.log`.
///
/// Inputs:
/// - `level`: Default filter directive when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("recipe-browser.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(BrowserTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(BrowserTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    if let Some(path) = theme::ensure_settings_file() {
        tracing::info!(path = %path.display(), "created settings file");
    }
    let settings = apply_overrides(&args, theme::settings());
    let filters = initial_filters(&args, &settings);

    let code = match args.mode() {
        Mode::Search => handle_search(&settings, &filters, args.page).await,
        Mode::Lookup(title) => handle_lookup(&settings, &title).await,
        Mode::Interactive => {
            tracing::info!(server = %settings.server_url, "recipe browser starting");
            let options = RunOptions {
                settings,
                filters,
                page: args.page,
            };
            match app::run(options).await {
                Ok(()) => 0,
                Err(err) => {
                    tracing::error!(error = ?err, "application error");
                    eprintln!("recipe-browser: {err}");
                    1
                }
            }
        }
    };
    tracing::info!(code, "recipe browser exited");
    if code != 0 {
        std::process::exit(code);
    }
}
