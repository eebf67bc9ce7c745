//! Shared rendering utilities and helpers.
//!
//! Low-level text handling used across the terminal components: fuzzy match
//! highlighting with proper ANSI escape management, and word wrapping.
//!
//! # Features
//!
//! - **Fuzzy Match Highlighting**: Renders text with highlighted character ranges
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::helpers::{compute_highlight_ranges, write_highlighted_text};
//! use marquee::ui::Theme;
//!
//! let theme = Theme::default();
//! let ranges = compute_highlight_ranges("Blade Runner", "runner");
//! assert_eq!(ranges, vec![(6, 12)]);
//!
//! let mut out = Vec::new();
//! write_highlighted_text(&mut out, "Blade Runner", &ranges, &theme)?;
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::io::{self, Write};

/// Computes character index ranges to highlight for fuzzy match visualization.
///
/// Uses the Skim fuzzy matcher to find matching character positions, then
/// coalesces consecutive indices into ranges.
///
/// # Returns
///
/// `(start, end)` character index ranges (exclusive end), empty when `term`
/// does not match.
#[must_use]
pub fn compute_highlight_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let matcher = SkimMatcherV2::default();
    let Some((_score, indices)) = matcher.fuzzy_indices(text, term) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Writes text with highlighted character ranges.
///
/// Highlighted sections use `match_highlight_fg` on `match_highlight_bg`;
/// everything else is written as-is. Ranges past the end of the text are
/// clamped.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_highlighted_text<W: Write>(
    out: &mut W,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
) -> io::Result<()> {
    if ranges.is_empty() {
        return write!(out, "{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            write!(out, "{normal_section}")?;
        }

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        )?;

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        write!(out, "{remaining}")?;
    }

    Ok(())
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
