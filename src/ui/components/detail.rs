//! Detail pane renderer.
//!
//! # Layout
//!
//! ```text
//! Title (year)
//! ─────────────
//! Rating   7.4 / 10
//! Poster   https://image.tmdb.org/t/p/w500/abc.jpg
//! Trailer  https://www.youtube.com/watch?v=xyz
//!
//! Overview text, wrapped
//! to the terminal width.
//!
//! fav: Add to Favorites
//! ```
//!
//! The trailer line is left out when the movie has no trailer.

use crate::ui::components::{render_border, render_favorite_label};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;
use std::io::{self, Write};

/// Writes the full detail pane for one movie.
pub fn render_detail<W: Write>(
    out: &mut W,
    detail: &DetailView,
    image_base_url: &str,
    theme: &Theme,
    cols: usize,
) -> io::Result<()> {
    let movie = &detail.movie;

    writeln!(
        out,
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        movie.display_title(),
        Theme::reset()
    )?;
    render_border(out, &theme.colors.border, cols)?;

    writeln!(
        out,
        "{}Rating   {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::fg(&theme.colors.rating_fg),
        movie.rating_label(),
        Theme::reset()
    )?;

    if let Some(poster) = movie.poster_url(image_base_url) {
        render_link(out, "Poster", &poster, theme)?;
    }
    if let Some(trailer) = &detail.trailer {
        render_link(out, "Trailer", &trailer.watch_url(), theme)?;
    }

    writeln!(out)?;
    write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
    for line in wrap_text(&movie.overview, cols.max(20)) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", Theme::reset())?;

    render_favorite_label(out, detail.favorite, theme)
}

fn render_link<W: Write>(out: &mut W, label: &str, url: &str, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}{label:<9}{}{url}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::fg(&theme.colors.link_fg),
        Theme::reset()
    )
}
