//! Width-aware text helpers shared by the renderers and the CLI printer.

use ratatui::prelude::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::HitRect;

/// What: Truncate `s` to at most `width` display columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `width`: Maximum display width in terminal columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix followed by `…`.
///
/// Details:
/// - Uses `unicode_width` so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Keep the last `width` display columns of `s` (input fields scroll to the cursor).
#[must_use]
pub fn tail_to_width(s: &str, width: usize) -> &str {
    let mut used = 0usize;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

/// Right-pad `s` with spaces to `width` display columns.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

/// Convert a layout rect into the tuple stored for mouse hit-testing.
#[must_use]
pub const fn hit_rect(r: Rect) -> HitRect {
    (r.x, r.y, r.width, r.height)
}

/// Display width of `s` clamped into `u16`.
#[must_use]
pub fn width_u16(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects display width, including wide glyphs.
    ///
    /// Inputs:
    /// - ASCII and CJK strings truncated to small widths.
    ///
    /// Output:
    /// - Results never exceed the width and end with an ellipsis when cut.
    fn truncate_counts_display_columns() {
        assert_eq!(truncate_to_width("Pie", 5), "Pie");
        assert_eq!(truncate_to_width("Pumpkin Pie", 6), "Pumpk…");
        let cut = truncate_to_width("寿司寿司", 5);
        assert_eq!(cut, "寿司…");
        assert!(cut.width() <= 5);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn tail_and_pad() {
        assert_eq!(tail_to_width("chocolate", 4), "late");
        assert_eq!(tail_to_width("hi", 10), "hi");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
