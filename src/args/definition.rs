//! Command-line argument definition and processing.

use clap::Parser;

/// recipe-browser - A terminal browser for a paginated recipe search service
#[derive(Parser, Debug, Default)]
#[command(name = "recipe-browser")]
#[command(version)]
#[command(about = "A terminal browser for a paginated recipe search service", long_about = None)]
pub struct Args {
    /// Base URL of the recipe server (overrides `server_url` in settings.conf)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Prefill the title filter
    #[arg(long)]
    pub title: Option<String>,

    /// Prefill the cuisine filter
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Prefill the rating filter
    #[arg(long)]
    pub rating: Option<String>,

    /// Prefill the total time filter
    #[arg(long)]
    pub total_time: Option<String>,

    /// Prefill the serves filter
    #[arg(long)]
    pub serves: Option<String>,

    /// Page size (non-numeric or < 1 is treated as 1)
    #[arg(long, value_name = "N")]
    pub limit: Option<String>,

    /// Page to load first
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Fetch one page, print it as a table, and exit
    #[arg(short, long)]
    pub search: bool,

    /// Print the details of the recipe with this exact title and exit
    #[arg(long, value_name = "TITLE")]
    pub lookup: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a parsed command line asks the binary to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Start the interactive browser.
    Interactive,
    /// Print one page and exit.
    Search,
    /// Print one recipe and exit.
    Lookup(String),
}

impl Args {
    /// What: Decide which mode the command line selects.
    ///
    /// Details:
    /// - `--lookup` wins over `--search`; with neither the TUI starts.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(title) = &self.lookup {
            Mode::Lookup(title.clone())
        } else if self.search {
            Mode::Search
        } else {
            Mode::Interactive
        }
    }
}
