//! Small utility helpers for URL encoding and JSON value display.
//!
//! The functions in this module are dependency-free and used by the query
//! builder, the HTTP layer, and record decoding.

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Convert a scalar JSON value into a display string.
///
/// Inputs:
/// - `v`: JSON value from a recipe record.
///
/// Output:
/// - `Some(text)` for non-empty strings, numbers, and booleans; `None` for
///   null, empty/whitespace-only strings, arrays, and objects.
///
/// Details:
/// - Numbers keep serde_json's formatting (`4.8`, `115`).
#[must_use]
pub fn value_to_display(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Return `value` or the given placeholder when absent.
#[must_use]
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value.unwrap_or(placeholder).to_string()
}
