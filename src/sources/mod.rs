//! HTTP access to the recipe server.
//!
//! `search` pages through `/api/recipes/search`; `lookup` fetches a single
//! record by title. Both report failures as [`FetchError`] instead of
//! panicking or propagating transport errors past this module.

use std::time::Duration;

use crate::state::FetchError;

mod lookup;
mod search;

pub use lookup::fetch_recipe_by_title;
pub use search::{decode_recipes, fetch_recipes};

/// Path of the paginated search endpoint.
pub const SEARCH_PATH: &str = "/api/recipes/search";
/// Path prefix of the by-title endpoint.
pub const TITLE_PATH: &str = "/api/recipes/title";

/// Connection settings shared by every request to the recipe server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    /// Base URL such as `http://127.0.0.1:5000` (no trailing slash required).
    pub server_url: String,
    /// Whole-request timeout; `None` lets a hung request wait forever.
    pub timeout: Option<Duration>,
}

impl FetchConfig {
    /// What: Derive the fetch configuration from user settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings.
    ///
    /// Output:
    /// - `FetchConfig` with the server URL and timeout (`request_timeout_secs == 0` disables it).
    #[must_use]
    pub fn from_settings(settings: &crate::theme::Settings) -> Self {
        Self {
            server_url: settings.server_url.clone(),
            timeout: (settings.request_timeout_secs > 0)
                .then(|| Duration::from_secs(settings.request_timeout_secs)),
        }
    }

    /// Join the base URL with an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_url.trim_end_matches('/'))
    }

    /// What: Build the HTTP client for this configuration.
    ///
    /// Output:
    /// - A `reqwest::Client`; falls back to the default client if the builder fails.
    #[must_use]
    pub fn client(&self) -> reqwest::Client {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("recipe-browser/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        })
    }
}

/// What: Perform a GET and return the body of a successful response.
///
/// # Errors
/// - `FetchError::Network` on transport failure, timeout, or a non-success status.
async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Network(format!("HTTP {status} from {url}")));
    }
    resp.text()
        .await
        .map_err(|e| FetchError::Network(format!("failed to read response: {e}")))
}
