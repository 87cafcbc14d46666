use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted border color for unfocused panes.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for labels and hints.
    pub subtext0: Color,
    /// Accent color for the focused pane and the highlighted row.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Ratings and successful loads.
    pub green: Color,
    /// Loading indicator and empty-result fallback.
    pub yellow: Color,
    /// Error fallback.
    pub red: Color,
    /// Drawer border.
    pub lavender: Color,
}

impl Theme {
    /// Catppuccin Mocha.
    #[must_use]
    pub const fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            mantle: Color::Rgb(24, 24, 37),      // #181825
            surface1: Color::Rgb(69, 71, 90),    // #45475a
            overlay1: Color::Rgb(127, 132, 156), // #7f849c
            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext0: Color::Rgb(166, 173, 200), // #a6adc8
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            green: Color::Rgb(166, 227, 161),    // #a6e3a1
            yellow: Color::Rgb(249, 226, 175),   // #f9e2af
            red: Color::Rgb(243, 139, 168),      // #f38ba8
            lavender: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the recipe server.
    pub server_url: String,
    /// Page size used at startup and restored by a reset.
    pub default_page_size: u32,
    /// Whole-request timeout in seconds; 0 disables the timeout.
    pub request_timeout_secs: u64,
    /// Drop responses that belong to a superseded query.
    pub discard_stale_responses: bool,
    /// Move the page cursor back when a page turn fails.
    pub rollback_page_on_error: bool,
    /// Show the key hints line under the results.
    pub show_keybinds_footer: bool,
}

/// Server the app talks to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            default_page_size: crate::state::DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
            discard_stale_responses: true,
            rollback_page_on_error: false,
            show_keybinds_footer: true,
        }
    }
}
