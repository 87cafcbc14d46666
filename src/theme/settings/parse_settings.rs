use crate::theme::parsing::{parse_bool, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-`, and spaces in keys are read as `_`.
/// - Unparsable values leave the current value in place; unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "server_url" | "server" | "api_url" => {
                if !val.is_empty() {
                    settings.server_url = val.trim_end_matches('/').to_string();
                }
            }
            "default_page_size" | "page_size" | "limit" => {
                if let Ok(v) = val.parse::<u32>()
                    && v >= 1
                {
                    settings.default_page_size = v;
                }
            }
            "request_timeout_secs" | "request_timeout" | "timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "discard_stale_responses" => {
                settings.discard_stale_responses = parse_bool(val);
            }
            "rollback_page_on_error" => {
                settings.rollback_page_on_error = parse_bool(val);
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            _ => {
                tracing::debug!(key = %key, "[Config] ignoring unknown settings key");
            }
        }
    }
}
