//! Composable UI component renderers.
//!
//! Each component writes one part of the interface to any [`Write`] sink, so
//! the same code drives stdout and in-memory buffers in tests.
//!
//! # Components
//!
//! - [`header`]: List heading with border
//! - [`footer`]: Dimmed hint lines (load-more, help)
//! - [`cards`]: Movie card list with search highlighting
//! - [`detail`]: Single-movie detail pane
//! - [`empty`]: Empty state message

mod cards;
mod detail;
mod empty;
mod footer;
mod header;

pub use cards::render_cards;
pub use detail::render_detail;
pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FavoriteLabel;
use std::io::{self, Write};

/// Writes a horizontal border line.
pub fn render_border<W: Write>(out: &mut W, color: &str, cols: usize) -> io::Result<()> {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Writes an inline error message.
pub fn render_error<W: Write>(out: &mut W, message: &str, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}{message}{}", Theme::fg(&theme.colors.error_fg), Theme::reset())
}

/// Writes the favorite action with its current label.
pub fn render_favorite_label<W: Write>(out: &mut W, label: FavoriteLabel, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}fav: {}{}",
        Theme::fg(&theme.colors.favorite_fg),
        label.text(),
        Theme::reset()
    )
}
