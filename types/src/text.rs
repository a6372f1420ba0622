//! Small pure text helpers.

use unicode_width::UnicodeWidthChar;

/// Fit `raw` into `max_width` terminal columns, appending `suffix` if it had to be cut.
///
/// Widths are display columns, not chars: a wide CJK glyph counts as two.
/// The suffix counts toward the budget.
#[must_use]
pub fn fit_to_width(raw: &str, max_width: usize, suffix: &str) -> String {
    let total: usize = raw.chars().map(char_width).sum();
    if total <= max_width {
        return raw.to_string();
    }

    let suffix_width: usize = suffix.chars().map(char_width).sum();
    if suffix_width > max_width {
        return String::new();
    }
    let budget = max_width - suffix_width;

    let mut out = String::new();
    let mut used = 0;
    for c in raw.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(suffix);
    out
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
