use crate::sources::{FetchConfig, SEARCH_PATH, get_text};
use crate::state::{FetchError, Query, Recipe};

/// What: Decode a search response body into records, preserving server order.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - The records in the order the server listed them.
///
/// # Errors
/// - `FetchError::Decode` when the body is not a JSON array of objects.
pub fn decode_recipes(body: &str) -> Result<Vec<Recipe>, FetchError> {
    serde_json::from_str::<Vec<Recipe>>(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// What: Fetch one page of recipes from the search endpoint.
///
/// Inputs:
/// - `client`: Shared HTTP client (carries the timeout)
/// - `config`: Server location
/// - `query`: Page, limit, and constraints to send
///
/// Output:
/// - Records for that page; an empty vector means the page is past the end.
///
/// # Errors
/// - `FetchError::Network` on transport failure, timeout, or a non-success status.
/// - `FetchError::Decode` when the body is not a JSON array of recipe objects.
///
/// Details:
/// - Issues `GET {server}/api/recipes/search?page=..&limit=..[&title=..]...`.
pub async fn fetch_recipes(
    client: &reqwest::Client,
    config: &FetchConfig,
    query: &Query,
) -> Result<Vec<Recipe>, FetchError> {
    let url = format!("{}?{}", config.endpoint(SEARCH_PATH), query.to_query_string());
    tracing::debug!(url = %url, "fetching recipe page");
    let body = get_text(client, &url).await?;
    let records = decode_recipes(&body)?;
    tracing::debug!(page = query.page, records = records.len(), "fetched recipe page");
    Ok(records)
}
