//! Projection of a cached recipe into the detail drawer view.

use crate::state::{DetailView, Recipe};
use crate::util::or_placeholder;

/// Nutrient keys shown in the drawer, in display order. Other keys are dropped.
pub const NUTRIENT_KEYS: [&str; 9] = [
    "calories",
    "carbohydrateContent",
    "cholesterolContent",
    "fiberContent",
    "proteinContent",
    "saturatedFatContent",
    "sodiumContent",
    "sugarContent",
    "fatContent",
];

/// Placeholder for a missing description.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Placeholder for a missing time value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing title in the results table.
pub const UNTITLED: &str = "Untitled";

/// Column headers of the results table, matching [`project_row`].
pub const ROW_HEADERS: [&str; 5] = ["Title", "Cuisine", "Rating", "Total Time", "Serves"];

/// What: Produce the results-table cells for one record.
///
/// Output:
/// - Title, cuisine, rating, total time, and serves; "Untitled" or "N/A" when absent.
#[must_use]
pub fn project_row(recipe: &Recipe) -> [String; 5] {
    [
        or_placeholder(recipe.title.as_deref(), UNTITLED),
        or_placeholder(recipe.cuisine.as_deref(), NOT_AVAILABLE),
        or_placeholder(recipe.rating.as_deref(), NOT_AVAILABLE),
        or_placeholder(recipe.total_time.as_deref(), NOT_AVAILABLE),
        or_placeholder(recipe.serves.as_deref(), NOT_AVAILABLE),
    ]
}

/// What: Extract the fields needed by the detail drawer.
///
/// Inputs:
/// - `recipe`: Record selected from the result cache.
///
/// Output:
/// - `DetailView` with placeholders applied.
///
/// Details:
/// - Description defaults to "No description available."; each time defaults to "N/A".
/// - Nutrients are limited to [`NUTRIENT_KEYS`] in that order; keys absent from the
///   record are omitted rather than shown as "N/A".
#[must_use]
pub fn project_detail(recipe: &Recipe) -> DetailView {
    let nutrients = NUTRIENT_KEYS
        .iter()
        .filter_map(|key| {
            recipe
                .nutrients
                .get(*key)
                .map(|v| ((*key).to_string(), v.clone()))
        })
        .collect();
    DetailView {
        title: recipe.title.clone().unwrap_or_default(),
        cuisine: recipe.cuisine.clone().unwrap_or_default(),
        description: or_placeholder(recipe.description.as_deref(), NO_DESCRIPTION),
        total_time: or_placeholder(recipe.total_time.as_deref(), NOT_AVAILABLE),
        cook_time: or_placeholder(recipe.cook_time.as_deref(), NOT_AVAILABLE),
        prep_time: or_placeholder(recipe.prep_time.as_deref(), NOT_AVAILABLE),
        nutrients,
        ingredients: recipe.ingredients.clone(),
        instructions: recipe.instructions.clone(),
    }
}
