//! Command-line search and lookup modes.

use std::fmt::Write;

use crate::logic::{NUTRIENT_KEYS, ROW_HEADERS, build_query, project_detail, project_row};
use crate::sources::{FetchConfig, fetch_recipe_by_title, fetch_recipes};
use crate::state::{FilterState, Recipe};
use crate::theme::Settings;
use crate::ui::helpers::{pad_to_width, truncate_to_width};

/// Column widths for the printed table, in [`ROW_HEADERS`] order.
const WIDTHS: [usize; 5] = [40, 22, 6, 10, 12];

/// What: Render recipes as a fixed-width text table.
///
/// Inputs:
/// - `records`: Rows in server order
///
/// Output:
/// - Header, separator, and one line per record; missing values print as in the TUI table.
#[must_use]
pub fn format_results_table(records: &[Recipe]) -> String {
    let mut out = String::new();
    let header: Vec<String> = ROW_HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(name, w)| pad_to_width(name, w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    let rule: Vec<String> = WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for r in records {
        let line: Vec<String> = project_row(r)
            .iter()
            .zip(WIDTHS)
            .map(|(v, w)| pad_to_width(&truncate_to_width(v, w), w))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

/// What: Render one recipe the way the detail drawer shows it, as plain text.
#[must_use]
pub fn format_recipe_details(recipe: &Recipe) -> String {
    let view = project_detail(recipe);
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Time: {}", view.total_time);
    let _ = writeln!(out, "  Cook Time: {}", view.cook_time);
    let _ = writeln!(out, "  Prep Time: {}", view.prep_time);
    if !view.nutrients.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Nutrition:");
        let key_w = NUTRIENT_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
        for (k, v) in &view.nutrients {
            let _ = writeln!(out, "  {}  {v}", pad_to_width(k, key_w));
        }
    }
    for (label, lines) in [
        ("Ingredients:", &view.ingredients),
        ("Instructions:", &view.instructions),
    ] {
        if !lines.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{label}");
            for (i, l) in lines.iter().enumerate() {
                let _ = writeln!(out, "  {}. {l}", i + 1);
            }
        }
    }
    out
}

/// What: Fetch one page with the given filters and print it to stdout.
///
/// Inputs:
/// - `settings`: Effective settings (server, timeout)
/// - `filters`: Starting filters
/// - `page`: Page to fetch
///
/// Output:
/// - Process exit code: 0 on success (including an empty page), 1 on a fetch failure.
pub async fn handle_search(settings: &Settings, filters: &FilterState, page: u32) -> i32 {
    let cfg = FetchConfig::from_settings(settings);
    let query = build_query(filters, page);
    tracing::info!(query = %query.to_query_string(), "Search mode requested from CLI");
    match fetch_recipes(&cfg.client(), &cfg, &query).await {
        Ok(records) if records.is_empty() => {
            println!("{}", crate::logic::pagination::EMPTY_MESSAGE);
            0
        }
        Ok(records) => {
            print!("{}", format_results_table(&records));
            println!("Page {page} ({} recipes)", records.len());
            0
        }
        Err(e) => {
            eprintln!("{} ({e})", crate::logic::pagination::FAILED_MESSAGE);
            tracing::error!(error = %e, "CLI search failed");
            1
        }
    }
}

/// What: Look up one recipe by title and print its details to stdout.
///
/// Output:
/// - Process exit code: 0 when found, 2 when the server has no such title, 1 on failure.
pub async fn handle_lookup(settings: &Settings, title: &str) -> i32 {
    let cfg = FetchConfig::from_settings(settings);
    tracing::info!(title = %title, "Lookup mode requested from CLI");
    match fetch_recipe_by_title(&cfg.client(), &cfg, title).await {
        Ok(Some(recipe)) => {
            print!("{}", format_recipe_details(&recipe));
            0
        }
        Ok(None) => {
            eprintln!("Recipe not found: {title}");
            2
        }
        Err(e) => {
            eprintln!("Failed to load recipe. ({e})");
            tracing::error!(error = %e, "CLI lookup failed");
            1
        }
    }
}
