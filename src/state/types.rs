//! Core value types used by the recipe browser state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single recipe record as returned by the search endpoint.
///
/// Every field is optional on the wire. Values that the server may send
/// either as numbers or strings (`rating`, `serves`, times) are normalized
/// into display strings during decoding. Identity is positional: the
/// controller never relies on `id`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Recipe {
    /// Server-side row id, when present.
    #[serde(default, deserialize_with = "de_display")]
    pub id: Option<String>,
    /// Recipe title.
    #[serde(default, deserialize_with = "de_display")]
    pub title: Option<String>,
    /// Cuisine label (e.g., "Southern Recipes").
    #[serde(default, deserialize_with = "de_display")]
    pub cuisine: Option<String>,
    /// Average rating as reported by the server.
    #[serde(default, deserialize_with = "de_display")]
    pub rating: Option<String>,
    /// Total preparation plus cooking time.
    #[serde(default, deserialize_with = "de_display")]
    pub total_time: Option<String>,
    /// Serving count or free-form yield text.
    #[serde(default, deserialize_with = "de_display")]
    pub serves: Option<String>,
    /// Long description.
    #[serde(default, deserialize_with = "de_display")]
    pub description: Option<String>,
    /// Cooking time.
    #[serde(default, deserialize_with = "de_display")]
    pub cook_time: Option<String>,
    /// Preparation time.
    #[serde(default, deserialize_with = "de_display")]
    pub prep_time: Option<String>,
    /// Nutrient values keyed by schema.org nutrient name.
    #[serde(default, deserialize_with = "de_nutrients")]
    pub nutrients: BTreeMap<String, String>,
    /// Ingredient lines, when the server includes them.
    #[serde(default, deserialize_with = "de_lines")]
    pub ingredients: Vec<String>,
    /// Instruction steps, when the server includes them.
    #[serde(default, deserialize_with = "de_lines")]
    pub instructions: Vec<String>,
}

fn de_display<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(crate::util::value_to_display))
}

fn de_nutrients<'de, D>(d: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    let mut out = BTreeMap::new();
    if let Some(Value::Object(map)) = v {
        for (k, val) in &map {
            if let Some(s) = crate::util::value_to_display(val) {
                out.insert(k.clone(), s);
            }
        }
    }
    Ok(out)
}

fn de_lines<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(crate::util::value_to_display)
            .collect(),
        Some(other) => crate::util::value_to_display(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// Editable filter field identifiers, in on-screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Title substring filter.
    Title,
    /// Exact cuisine filter.
    Cuisine,
    /// Minimum rating filter.
    Rating,
    /// Total time filter.
    TotalTime,
    /// Serves prefix filter.
    Serves,
    /// Page size input.
    PageSize,
}

impl FilterField {
    /// All fields in focus-cycle order.
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::Cuisine,
        Self::Rating,
        Self::TotalTime,
        Self::Serves,
        Self::PageSize,
    ];

    /// Human-readable label for the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Cuisine => "Cuisine",
            Self::Rating => "Rating",
            Self::TotalTime => "Total Time",
            Self::Serves => "Serves",
            Self::PageSize => "Limit",
        }
    }
}

/// Current user-chosen search constraints plus the raw page-size input.
///
/// Text fields are stored exactly as typed; trimming happens when a query is
/// built. `page_size` keeps the raw input so that an invalid value stays
/// visible to the user while the effective limit is normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Title filter text.
    pub title: String,
    /// Cuisine filter text.
    pub cuisine: String,
    /// Rating filter text.
    pub rating: String,
    /// Total time filter text.
    pub total_time: String,
    /// Serves filter text.
    pub serves: String,
    /// Raw page-size input.
    pub page_size: String,
}

/// Page size applied on startup and after a reset unless overridden in settings.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

impl Default for FilterState {
    fn default() -> Self {
        Self::with_page_size(&DEFAULT_PAGE_SIZE.to_string())
    }
}

impl FilterState {
    /// What: Build an empty filter set with the given raw page size.
    ///
    /// Inputs:
    /// - `page_size`: Raw page-size text (normalized only when read).
    ///
    /// Output:
    /// - `FilterState` with all text filters empty.
    #[must_use]
    pub fn with_page_size(page_size: &str) -> Self {
        Self {
            title: String::new(),
            cuisine: String::new(),
            rating: String::new(),
            total_time: String::new(),
            serves: String::new(),
            page_size: page_size.to_string(),
        }
    }

    /// Borrow the raw text of `field`.
    #[must_use]
    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Title => &self.title,
            FilterField::Cuisine => &self.cuisine,
            FilterField::Rating => &self.rating,
            FilterField::TotalTime => &self.total_time,
            FilterField::Serves => &self.serves,
            FilterField::PageSize => &self.page_size,
        }
    }

    /// Mutably borrow the raw text of `field` for editing.
    pub fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Title => &mut self.title,
            FilterField::Cuisine => &mut self.cuisine,
            FilterField::Rating => &mut self.rating,
            FilterField::TotalTime => &mut self.total_time,
            FilterField::Serves => &mut self.serves,
            FilterField::PageSize => &mut self.page_size,
        }
    }

    /// Effective page size: the raw input parsed, or 1 when it is unusable.
    #[must_use]
    pub fn effective_page_size(&self) -> u64 {
        crate::logic::query::parse_page_size(&self.page_size)
    }
}

/// Concrete parameter set sent to the search endpoint for one page request.
///
/// Built fresh for every fetch by [`crate::logic::build_query`] and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Requested page (1-based).
    pub page: u32,
    /// Page size.
    pub limit: u64,
    /// Title constraint.
    pub title: Option<String>,
    /// Cuisine constraint.
    pub cuisine: Option<String>,
    /// Rating constraint.
    pub rating: Option<String>,
    /// Total time constraint.
    pub total_time: Option<String>,
    /// Serves constraint.
    pub serves: Option<String>,
}

impl Query {
    /// What: Render the query as a URL query string.
    ///
    /// Output:
    /// - `page=..&limit=..` followed by the present constraints in the order
    ///   `title`, `cuisine`, `rating`, `total_time`, `serves`.
    ///
    /// Details:
    /// - Values are percent-encoded with [`crate::util::percent_encode`].
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.limit);
        let optional = [
            ("title", &self.title),
            ("cuisine", &self.cuisine),
            ("rating", &self.rating),
            ("total_time", &self.total_time),
            ("serves", &self.serves),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                out.push('&');
                out.push_str(key);
                out.push('=');
                out.push_str(&crate::util::percent_encode(v));
            }
        }
        out
    }
}

/// Search request sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Page cursor value at dispatch time.
    pub page: u32,
    /// Query to execute.
    pub query: Query,
}

/// Outcome corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Echoed page cursor from the originating query.
    pub page: u32,
    /// Records in server order, or the failure that prevented loading them.
    pub outcome: Result<Vec<Recipe>, FetchError>,
}

/// Failure to obtain a page of recipes from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure, timeout, or non-success HTTP status.
    Network(String),
    /// Response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Selection failure for positional lookups into the result cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// Requested row is outside `[0, len)`.
    IndexOutOfRange {
        /// Requested row.
        index: usize,
        /// Number of cached records.
        len: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "row {index} is out of range (cache holds {len} records)")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Phase of the pagination controller. The page itself lives in `AppState::page`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    /// Last request was applied (or nothing has been requested yet).
    Idle,
    /// A request for the current page is in flight.
    Loading,
    /// The last request failed; waiting for a user action.
    Error,
}

/// What the results area currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// Nothing has been loaded yet.
    Pending,
    /// Table of the cached records, one row per record in cache order.
    Table,
    /// Fallback for a successful response with no records.
    Empty,
    /// Fallback for a failed request, with the message to show.
    Error(String),
}

/// Clickable controls drawn under the filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Apply the filters from page 1.
    Apply,
    /// Clear the filters and reload page 1.
    Reset,
    /// Previous page.
    Prev,
    /// Next page.
    Next,
}

impl Control {
    /// All controls in on-screen order.
    pub const ALL: [Self; 4] = [Self::Apply, Self::Reset, Self::Prev, Self::Next];

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apply => "Apply",
            Self::Reset => "Reset",
            Self::Prev => "Previous",
            Self::Next => "Next",
        }
    }
}

/// Screen rectangle `(x, y, width, height)` recorded during a draw for mouse hit-testing.
pub type HitRect = (u16, u16, u16, u16);

/// `true` when `(x, y)` lies inside `rect`.
#[must_use]
pub const fn rect_contains(rect: HitRect, x: u16, y: u16) -> bool {
    let (rx, ry, rw, rh) = rect;
    x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
}

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// A filter input field.
    Filter(FilterField),
    /// The results table.
    Results,
}

/// Subset of a [`Recipe`] prepared for the detail drawer, with placeholders applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailView {
    /// Recipe title (may be empty).
    pub title: String,
    /// Cuisine label (may be empty).
    pub cuisine: String,
    /// Description or the "No description available." placeholder.
    pub description: String,
    /// Total time or "N/A".
    pub total_time: String,
    /// Cook time or "N/A".
    pub cook_time: String,
    /// Prep time or "N/A".
    pub prep_time: String,
    /// Recognized nutrients present on the record, in display order.
    pub nutrients: Vec<(String, String)>,
    /// Ingredient lines.
    pub ingredients: Vec<String>,
    /// Instruction steps.
    pub instructions: Vec<String>,
}

impl DetailView {
    /// Drawer heading in the form `"{title} - {cuisine}"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.cuisine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Decode a recipe whose scalar fields arrive with mixed JSON types.
    ///
    /// Inputs:
    /// - JSON object with numeric `rating`, string `serves`, null `cook_time`, and nutrient strings.
    ///
    /// Output:
    /// - Fields normalized into display strings; null and empty values become `None`.
    fn recipe_decodes_mixed_scalar_types() {
        let raw = r#"{
            "id": 7,
            "title": "Sweet Potato Pie",
            "cuisine": "Southern Recipes",
            "rating": 4.8,
            "serves": "8 servings",
            "total_time": 115,
            "cook_time": null,
            "prep_time": "",
            "nutrients": {"calories": "389 kcal", "fatContent": 21.5, "bogus": null},
            "ingredients": ["1 crust", "2 potatoes"]
        }"#;
        let r: Recipe = serde_json::from_str(raw).expect("decodes");
        assert_eq!(r.id.as_deref(), Some("7"));
        assert_eq!(r.rating.as_deref(), Some("4.8"));
        assert_eq!(r.total_time.as_deref(), Some("115"));
        assert_eq!(r.cook_time, None);
        assert_eq!(r.prep_time, None);
        assert_eq!(r.nutrients.get("calories").map(String::as_str), Some("389 kcal"));
        assert_eq!(r.nutrients.get("fatContent").map(String::as_str), Some("21.5"));
        assert!(!r.nutrients.contains_key("bogus"));
        assert_eq!(r.ingredients.len(), 2);
        assert!(r.instructions.is_empty());
    }

    #[test]
    /// What: Query strings list `page` and `limit` first and encode values.
    fn query_string_orders_and_encodes() {
        let q = Query {
            page: 2,
            limit: 10,
            title: Some("mac & cheese".into()),
            cuisine: None,
            rating: Some("4.5".into()),
            total_time: Some("30".into()),
            serves: Some("4".into()),
        };
        assert_eq!(
            q.to_query_string(),
            "page=2&limit=10&title=mac%20%26%20cheese&rating=4.5&total_time=30&serves=4"
        );
    }

    #[test]
    fn filter_fields_round_trip_through_accessors() {
        let mut f = FilterState::default();
        for field in FilterField::ALL {
            f.field_mut(field).push('x');
        }
        assert_eq!(f.field(FilterField::Serves), "x");
        assert_eq!(f.field(FilterField::PageSize), "50x");
        assert_eq!(f.effective_page_size(), 50);
    }
}
