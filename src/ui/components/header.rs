//! Heading component renderer.
//!
//! Renders the list heading as a centered, bold title followed by a border.

use crate::ui::components::render_border;
use crate::ui::theme::Theme;
use std::io::{self, Write};

/// Writes the heading line and its border.
///
/// Padding is split evenly on both sides to center the title. If the width
/// cannot evenly divide, the right side gets the extra column.
///
/// # Example
///
/// ```rust
/// use marquee::ui::components::render_header;
/// use marquee::ui::Theme;
///
/// let mut out = Vec::new();
/// render_header(&mut out, "Popular Movies", &Theme::default(), 40)?;
/// assert!(String::from_utf8_lossy(&out).contains("Popular Movies"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_header<W: Write>(out: &mut W, title: &str, theme: &Theme, cols: usize) -> io::Result<()> {
    let title_len = title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }

    write!(out, "{}", " ".repeat(padding))?;
    write!(out, "{title}")?;
    write!(out, "{}", " ".repeat(cols.saturating_sub(padding + title_len)))?;
    writeln!(out, "{}", Theme::reset())?;

    render_border(out, &theme.colors.border, cols)
}
