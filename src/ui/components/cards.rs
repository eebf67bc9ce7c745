//! Movie card list renderer.
//!
//! Each card is one line: the movie id (what `open` takes), the title with the
//! search term highlighted, the release year and the rating.
//!
//! ```text
//!      603  The Matrix (1999)                          8.2 / 10
//! ```

use crate::ui::helpers::write_highlighted_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;
use std::io::{self, Write};

/// Width of the id column.
const ID_WIDTH: usize = 8;

/// Width reserved for the rating column, including spacing.
const RATING_WIDTH: usize = 12;

/// Writes every card in order.
pub fn render_cards<W: Write>(out: &mut W, cards: &[CardItem], theme: &Theme, cols: usize) -> io::Result<()> {
    for card in cards {
        render_card(out, card, theme, cols)?;
    }
    Ok(())
}

fn render_card<W: Write>(out: &mut W, card: &CardItem, theme: &Theme, cols: usize) -> io::Result<()> {
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write!(out, "{:>ID_WIDTH$}  ", card.id.0)?;
    write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;

    write_highlighted_text(out, &card.title, &card.highlight_ranges, theme)?;
    // highlights end in a reset
    write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;

    let mut title_len = card.title.chars().count();
    if let Some(year) = card.year {
        let suffix = format!(" ({year})");
        title_len += suffix.chars().count();
        write!(out, "{}{suffix}", Theme::fg(&theme.colors.text_dim))?;
    }

    let used = ID_WIDTH + 2 + title_len;
    let gap = cols.saturating_sub(used + RATING_WIDTH).max(2);
    write!(out, "{}", " ".repeat(gap))?;

    writeln!(out, "{}{}{}", Theme::fg(&theme.colors.rating_fg), card.rating, Theme::reset())
}
