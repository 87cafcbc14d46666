//! Shared utilities for argument processing.

use crate::args::Args;
use crate::state::FilterState;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply command-line overrides on top of loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from `settings.conf`.
///
/// Output:
/// - Settings with `--server` applied when given.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(server) = args.server.as_deref().map(str::trim)
        && !server.is_empty()
    {
        settings.server_url = server.trim_end_matches('/').to_string();
    }
    settings
}

/// What: Build the starting filter set from settings and command-line prefills.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Effective settings (supplies the default page size).
///
/// Output:
/// - `FilterState` with the prefills copied verbatim; `--limit` replaces the page size text.
#[must_use]
pub fn initial_filters(args: &Args, settings: &Settings) -> FilterState {
    let mut filters = FilterState::with_page_size(&settings.default_page_size.to_string());
    let prefills = [
        (&mut filters.title, &args.title),
        (&mut filters.cuisine, &args.cuisine),
        (&mut filters.rating, &args.rating),
        (&mut filters.total_time, &args.total_time),
        (&mut filters.serves, &args.serves),
        (&mut filters.page_size, &args.limit),
    ];
    for (slot, value) in prefills {
        if let Some(v) = value {
            slot.clone_from(v);
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_log_level() {
        let args = Args {
            verbose: true,
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: Prefills land in the filter state and `--server` replaces the URL.
    ///
    /// Inputs:
    /// - Args with a server, a cuisine, and a limit; settings with page size 20.
    ///
    /// Output:
    /// - Server overridden without trailing slash; cuisine and limit copied; other fields empty.
    fn overrides_and_prefills() {
        let args = Args {
            server: Some("http://example.test:9000/".into()),
            cuisine: Some("Thai".into()),
            limit: Some("abc".into()),
            ..Args::default()
        };
        let settings = apply_overrides(
            &args,
            Settings {
                default_page_size: 20,
                ..Settings::default()
            },
        );
        assert_eq!(settings.server_url, "http://example.test:9000");
        let filters = initial_filters(&args, &settings);
        assert_eq!(filters.cuisine, "Thai");
        assert_eq!(filters.page_size, "abc");
        assert_eq!(filters.effective_page_size(), 1);
        assert!(filters.title.is_empty());

        let plain = initial_filters(&Args::default(), &settings);
        assert_eq!(plain.page_size, "20");
    }
}
