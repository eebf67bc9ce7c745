//! Footer component renderer.
//!
//! Renders hint lines (load-more control, command help) in dimmed text.

use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Writes a dimmed, centered hint line.
///
/// # Truncation
///
/// Text wider than `cols` is cut to fit.
pub fn render_footer<W: Write>(out: &mut W, text: &str, theme: &Theme, cols: usize) -> io::Result<()> {
    let visible: String = text.chars().take(cols).collect();
    let text_len = visible.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))?;
    write!(out, "{}", " ".repeat(padding))?;
    write!(out, "{visible}")?;
    writeln!(out, "{}", Theme::reset())
}
