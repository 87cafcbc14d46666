/// What: Strip a trailing comment from a `key = value` value.
///
/// Inputs:
/// - `s`: Raw value text (right of `=`).
///
/// Output:
/// - Trimmed value without its comment.
///
/// Details:
/// - A `#` only starts a comment at the beginning of the value or after whitespace,
///   so URL fragments and colors such as `#ff0000` survive when glued to text.
/// - `//` is never treated as a comment here; it is part of `http://` URLs.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()))
        .map_or(s.len(), |(i, _)| i);
    s[..cut].trim()
}

/// What: Interpret a settings value as a boolean switch.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` otherwise.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are removed without truncating URLs.
    ///
    /// Inputs:
    /// - Values with trailing `# comment`, a URL, and a glued `#`.
    ///
    /// Output:
    /// - Comment stripped; `http://` and `a#b` preserved.
    fn strip_inline_comment_keeps_urls() {
        assert_eq!(strip_inline_comment("20   # percent"), "20");
        assert_eq!(
            strip_inline_comment("http://localhost:5000 # dev server"),
            "http://localhost:5000"
        );
        assert_eq!(strip_inline_comment("a#b"), "a#b");
        assert_eq!(strip_inline_comment("# only comment"), "");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for v in ["true", "1", "YES", "On"] {
            assert!(parse_bool(v), "{v}");
        }
        for v in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(v), "{v}");
        }
    }
}
