use reqwest::StatusCode;

use crate::sources::{FetchConfig, TITLE_PATH};
use crate::state::{FetchError, Recipe};
use crate::util::percent_encode;

/// What: Fetch a single recipe by its exact title.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `config`: Server location
/// - `title`: Exact title to look up (trimmed, then percent-encoded into the path)
///
/// Output:
/// - `Ok(Some(recipe))` when found, `Ok(None)` when the server answers 404.
///
/// # Errors
/// - `FetchError::Network` on transport failure or any other non-success status.
/// - `FetchError::Decode` when the body is not a recipe object.
pub async fn fetch_recipe_by_title(
    client: &reqwest::Client,
    config: &FetchConfig,
    title: &str,
) -> Result<Option<Recipe>, FetchError> {
    let url = format!(
        "{}/{}",
        config.endpoint(TITLE_PATH),
        percent_encode(title.trim())
    );
    tracing::debug!(url = %url, "looking up recipe by title");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let resp = resp
        .error_for_status()
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("failed to read response: {e}")))?;
    serde_json::from_str::<Recipe>(&body)
        .map(Some)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::http_stub;

    fn config(server_url: String) -> FetchConfig {
        FetchConfig {
            server_url,
            timeout: Some(std::time::Duration::from_secs(5)),
        }
    }

    #[tokio::test]
    /// What: A found title decodes into a recipe and the title is encoded into the path.
    async fn lookup_found() {
        let (base, seen) = http_stub(
            "200 OK",
            r#"{"title":"Mac & Cheese","cuisine":"Comfort","nutrients":{"calories":"500 kcal"}}"#,
        )
        .await;
        let cfg = config(base);
        let found = fetch_recipe_by_title(&cfg.client(), &cfg, " Mac & Cheese ")
            .await
            .expect("request ok")
            .expect("found");
        assert_eq!(found.cuisine.as_deref(), Some("Comfort"));
        let line = seen.await.expect("stub finished");
        assert!(line.starts_with("GET /api/recipes/title/Mac%20%26%20Cheese "));
    }

    #[tokio::test]
    async fn lookup_not_found_is_none() {
        let (base, _seen) = http_stub("404 Not Found", r#"{"error":"Recipe not found"}"#).await;
        let cfg = config(base);
        let res = fetch_recipe_by_title(&cfg.client(), &cfg, "Nothing")
            .await
            .expect("404 is not an error");
        assert!(res.is_none());
    }
}
