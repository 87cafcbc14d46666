//! Query building and dispatch to the search worker.

use tokio::sync::mpsc;

use crate::state::{AppState, FilterState, PageStatus, Query, QueryInput};

/// What: Parse a raw page-size input into an effective limit.
///
/// Inputs:
/// - `raw`: Text typed into the page-size field.
///
/// Output:
/// - The leading integer of `raw`, or `1` when there is none or it is below 1.
///
/// Details:
/// - Leading whitespace and an optional sign are accepted; parsing stops at the
///   first non-digit, so `"12abc"` yields 12 and `"3.9"` yields 3.
/// - No upper bound is applied; only values beyond `u64::MAX` saturate.
#[must_use]
pub fn parse_page_size(raw: &str) -> u64 {
    let t = raw.trim_start();
    let (negative, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let run: &str = digits
        .find(|c: char| !c.is_ascii_digit())
        .map_or(digits, |end| &digits[..end]);
    if run.is_empty() || negative {
        return 1;
    }
    let value = run.parse::<u64>().unwrap_or(u64::MAX);
    value.max(1)
}

/// Trimmed value, or `None` when the field is blank.
fn constraint(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// What: Map the current filters and a page number to the canonical query.
///
/// Inputs:
/// - `filters`: Current filter inputs
/// - `page`: Page cursor value
///
/// Output:
/// - `Query` with `page`, the normalized `limit`, and every non-empty trimmed constraint.
///
/// Details:
/// - Pure and deterministic; an empty field means "no constraint", never an empty value.
#[must_use]
pub fn build_query(filters: &FilterState, page: u32) -> Query {
    Query {
        page,
        limit: filters.effective_page_size(),
        title: constraint(&filters.title),
        cuisine: constraint(&filters.cuisine),
        rating: constraint(&filters.rating),
        total_time: constraint(&filters.total_time),
        serves: constraint(&filters.serves),
    }
}

/// What: Build the query for the current page and send it to the search worker with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates ids, page label, status, and `last_query`
/// - `query_tx`: Channel to send the `QueryInput`
///
/// Output:
/// - Sends a `QueryInput` tagged with the new id and current page.
///
/// Details:
/// - The id allows correlating responses so the controller can discard stale results.
/// - The page indicator is synchronized to the cursor at dispatch time.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    let query = build_query(&app.filters, app.page);
    app.page_label = app.page;
    app.status = PageStatus::Loading;
    app.last_query = Some(query.clone());
    tracing::debug!(id, page = app.page, query = %query.to_query_string(), "dispatching search");
    let _ = query_tx.send(QueryInput {
        id,
        page: app.page,
        query,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: All-empty filters produce a query with only `page` and `limit`.
    ///
    /// Inputs:
    /// - Default filters plus whitespace-only values in every text field.
    ///
    /// Output:
    /// - `page=4&limit=50` with no other keys.
    fn empty_filters_yield_page_and_limit_only() {
        let mut filters = FilterState::default();
        filters.title = "   ".into();
        filters.serves = "\t".into();
        let q = build_query(&filters, 4);
        assert_eq!(q.to_query_string(), "page=4&limit=50");
        assert_eq!(q.title, None);
        assert_eq!(q.serves, None);
    }

    #[test]
    /// What: Unusable page sizes normalize to a limit of exactly 1.
    ///
    /// Inputs:
    /// - Non-numeric, zero, negative, and empty inputs.
    ///
    /// Output:
    /// - Every case yields `limit == 1`; the raw input is left untouched.
    fn invalid_page_sizes_become_one() {
        for raw in ["", "abc", "0", "-5", "  ", "-", "+", "x12"] {
            let mut filters = FilterState::default();
            filters.page_size = raw.to_string();
            let q = build_query(&filters, 1);
            assert_eq!(q.limit, 1, "input {raw:?}");
            assert_eq!(filters.page_size, raw);
        }
    }

    #[test]
    /// What: Leading-integer parsing matches what a user would expect from the limit field.
    fn page_size_parses_leading_integer() {
        assert_eq!(parse_page_size("12abc"), 12);
        assert_eq!(parse_page_size("  7"), 7);
        assert_eq!(parse_page_size("3.9"), 3);
        assert_eq!(parse_page_size("+8"), 8);
        assert_eq!(parse_page_size("500"), 500);
        assert_eq!(parse_page_size("99999999999999"), 99_999_999_999_999);
        assert_eq!(parse_page_size("99999999999999999999999"), u64::MAX);
    }

    #[test]
    /// What: Page sizes past the 32-bit range are forwarded unchanged.
    fn large_page_size_is_forwarded() {
        let filters = FilterState::with_page_size("5000000000");
        let q = build_query(&filters, 1);
        assert_eq!(q.limit, 5_000_000_000);
        assert_eq!(q.to_query_string(), "page=1&limit=5000000000");
    }

    #[test]
    /// What: Constraints are trimmed and forwarded in canonical order.
    fn constraints_are_trimmed() {
        let mut filters = FilterState::default();
        filters.title = "  soup ".into();
        filters.cuisine = "Italian".into();
        filters.total_time = " 45 ".into();
        let q = build_query(&filters, 1);
        assert_eq!(
            q.to_query_string(),
            "page=1&limit=50&title=soup&cuisine=Italian&total_time=45"
        );
    }

    #[tokio::test]
    /// What: Ensure `send_query` increments identifiers and forwards the built query.
    ///
    /// Inputs:
    /// - `AppState` on page 3 with a title filter.
    ///
    /// Output:
    /// - `latest_query_id` advances to `1`, status becomes `Loading`, and the channel
    ///   receives a matching `QueryInput`.
    async fn send_query_increments_and_sends() {
        let mut app = AppState {
            page: 3,
            ..Default::default()
        };
        app.filters.title = "pie".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx);
        assert_eq!(app.latest_query_id, 1);
        assert_eq!(app.next_query_id, 2);
        assert_eq!(app.status, PageStatus::Loading);
        assert_eq!(app.page_label, 3);
        let q = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("query sent");
        assert_eq!(q.id, app.latest_query_id);
        assert_eq!(q.page, 3);
        assert_eq!(q.query.to_query_string(), "page=3&limit=50&title=pie");
        assert_eq!(app.last_query.as_ref(), Some(&q.query));
    }
}
