//! Empty state component renderer.
//!
//! Renders the message shown when a list has nothing to display.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Writes the empty state message.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
///
/// The message uses `empty_state_fg`; the subtitle, when present, uses
/// `text_dim` with dim styling.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(out)?;

    let msg_padding = cols.saturating_sub(empty.message.chars().count()) / 2;
    writeln!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(msg_padding),
        empty.message,
        Theme::reset()
    )?;

    if empty.subtitle.is_empty() {
        return Ok(());
    }

    let sub_padding = cols.saturating_sub(empty.subtitle.chars().count()) / 2;
    writeln!(
        out,
        "{}{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(sub_padding),
        empty.subtitle,
        Theme::reset()
    )
}
