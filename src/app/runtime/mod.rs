use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::send_query;
use crate::sources::FetchConfig;
use crate::state::FilterState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

/// Channel bundle shared by the loop and workers.
pub mod channels;
/// Main `select!` loop.
pub mod event_loop;
/// Initial state construction.
pub mod init;
/// Background workers.
pub mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::initialize_app_state;
use workers::{spawn_event_thread, spawn_search_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup and the event thread (`1` enables).
pub const HEADLESS_ENV: &str = "RECIPE_BROWSER_TEST_HEADLESS";

/// Everything the interactive runtime needs from the command line and config.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Effective settings (file plus command-line overrides).
    pub settings: Settings,
    /// Filters to start with.
    pub filters: FilterState,
    /// Page to load first.
    pub page: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            filters: FilterState::with_page_size(&settings.default_page_size.to_string()),
            settings,
            page: 1,
        }
    }
}

/// What: Run the recipe browser end-to-end: initialize terminal and state, spawn
/// the search worker and event reader, drive the event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `options`: Settings, starting filters, and starting page
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - The first page is requested immediately, so the view starts in `Loading`.
/// - With `RECIPE_BROWSER_TEST_HEADLESS=1` no terminal is touched and no input
///   is read; the loop then only processes worker results.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let fetch_config = FetchConfig::from_settings(&options.settings);
    let mut app = initialize_app_state(options);

    let (mut channels, query_rx) = Channels::new();
    spawn_search_worker(query_rx, channels.search_result_tx.clone(), fetch_config);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Initial load
    send_query(&mut app, &channels.query_tx);

    run_event_loop(&mut app, &mut channels, terminal.as_mut()).await;

    // Signal event reading thread to exit immediately
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    tracing::info!(page = app.page, "[Runtime] exited");
    Ok(())
}
