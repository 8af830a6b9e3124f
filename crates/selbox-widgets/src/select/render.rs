#![forbid(unsafe_code)]

//! Plain-text renderer.
//!
//! Turns a [`SelectView`] into fixed-width lines:
//!
//! ```text
//! [second            ] x v
//! >  first
//!  * second
//!    third
//! ```
//!
//! The header is the closed box: current value, clear button `x`, and a caret
//! (`v` closed, `^` open). A focused box uses `{ }` instead of `[ ]`. When
//! open, one row per option follows, `>` marking the highlight and `*` the
//! selection. Widths are measured in terminal columns; control characters in
//! labels are drawn as spaces.

use super::view::{DisplayValue, SelectView};
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

/// Columns used by the header around the value: brackets, ` x `, caret.
const HEADER_CHROME: usize = 6;

/// Columns used by an option row before its label.
const ROW_GUTTER: usize = 3;

/// Render `view` into lines exactly `width` columns wide.
///
/// Widths too narrow for the chrome still produce the chrome; the value area
/// just collapses to nothing.
#[must_use]
pub fn render_lines(view: &SelectView, width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + if view.open { view.options.len() } else { 0 });

    let content = match &view.display {
        DisplayValue::Single(label) => label.clone().unwrap_or_default(),
        DisplayValue::Badges(badges) => badges
            .iter()
            .map(|badge| format!("{} x", badge.label))
            .collect::<Vec<_>>()
            .join(" | "),
    };
    let (left, right) = if view.focused { ('{', '}') } else { ('[', ']') };
    let caret = if view.open { '^' } else { 'v' };
    let inner = width.saturating_sub(HEADER_CHROME);
    lines.push(format!("{left}{}{right} x {caret}", fit(&content, inner)));

    if view.open {
        let label_width = width.saturating_sub(ROW_GUTTER);
        for row in &view.options {
            let cursor = if row.highlighted { '>' } else { ' ' };
            let mark = if row.selected { '*' } else { ' ' };
            lines.push(format!("{cursor}{mark} {}", fit(&row.label, label_width)));
        }
    }

    lines
}

/// Columns taken by one character once control characters become spaces.
fn char_columns(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Truncate to `width` columns (with an ellipsis) and pad to exactly `width`.
///
/// Measuring and truncating share [`char_columns`], and control characters
/// are written as spaces, so the result never exceeds `width`.
fn fit(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(char_columns).sum();
    let budget = if total <= width {
        width
    } else if width == 0 {
        return String::new();
    } else {
        width - 1
    };

    let mut used = 0;
    let mut out = String::with_capacity(text.len() + width);
    for ch in text.chars() {
        let w = char_columns(ch);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(if ch.is_control() { ' ' } else { ch });
    }
    if total > width {
        out.push(ELLIPSIS);
        used += 1;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
