//! Renderer contract and the terminal implementation.
//!
//! The controller talks to output through [`Renderer`] only. The
//! [`TerminalRenderer`] turns each [`RenderCommand`] into ANSI-styled lines on
//! any [`Write`] sink (stdout in the binary, a buffer in tests).
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::{RenderCommand, Renderer, TerminalRenderer, Theme};
//!
//! let mut renderer = TerminalRenderer::new(Vec::new(), Theme::default(), "https://image.tmdb.org/t/p/w500");
//! renderer.render(&RenderCommand::Heading("Popular Movies".into()));
//! let output = String::from_utf8(renderer.into_inner()).unwrap();
//! assert!(output.contains("Popular Movies"));
//! ```

use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, Pane, RenderCommand};
use std::io::{self, Write};

/// Terminal width used when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Hint shown while the load-more control is visible.
const LOAD_MORE_HINT: &str = "more: load more results";

/// Output collaborator of the controller.
///
/// Rendering never fails from the controller's point of view; implementations
/// deal with their own I/O errors.
pub trait Renderer {
    fn render(&mut self, command: &RenderCommand);
}

/// Renders commands as ANSI-styled text lines.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    image_base_url: String,
    cols: usize,
    pane: Pane,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme, image_base_url: impl Into<String>) -> Self {
        Self {
            out,
            theme,
            image_base_url: image_base_url.into(),
            cols: DEFAULT_WIDTH,
            pane: Pane::List,
        }
    }

    /// Overrides the layout width in columns.
    #[must_use]
    pub fn with_width(mut self, cols: usize) -> Self {
        self.cols = cols.max(20);
        self
    }

    /// Writes a dimmed hint line outside the command stream (help text).
    pub fn hint(&mut self, text: &str) {
        let result = text
            .lines()
            .try_for_each(|line| components::render_footer(&mut self.out, line, &self.theme, self.cols))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write hint");
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, command: &RenderCommand) -> io::Result<()> {
        let theme = &self.theme;
        let out = &mut self.out;

        match command {
            RenderCommand::Heading(title) => {
                writeln!(out)?;
                components::render_header(out, title, theme, self.cols)?;
            }
            RenderCommand::Loading(true) => {
                writeln!(out, "{}{}Loading...{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset())?;
            }
            RenderCommand::Loading(false) | RenderCommand::LoadMore(false) | RenderCommand::ClearInput => {}
            RenderCommand::ShowPane(pane) => {
                self.pane = *pane;
            }
            RenderCommand::Movies { movies, highlight, .. } => {
                let cards: Vec<CardItem> = movies
                    .iter()
                    .map(|movie| CardItem::from_movie(movie, highlight.as_deref(), &self.image_base_url))
                    .collect();
                components::render_cards(out, &cards, theme, self.cols)?;
            }
            RenderCommand::Empty(empty) => {
                components::render_empty_state(out, empty, theme, self.cols)?;
            }
            RenderCommand::Detail(detail) => {
                writeln!(out)?;
                components::render_detail(out, detail, &self.image_base_url, theme, self.cols)?;
            }
            RenderCommand::Error { message, .. } => {
                components::render_error(out, message, theme)?;
            }
            // the control belongs to the list pane
            RenderCommand::LoadMore(true) if self.pane == Pane::List => {
                components::render_footer(out, LOAD_MORE_HINT, theme, self.cols)?;
            }
            RenderCommand::LoadMore(true) => {}
            RenderCommand::FavoriteLabel(label) => {
                components::render_favorite_label(out, *label, theme)?;
            }
        }

        out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, command: &RenderCommand) {
        if let Err(e) = self.draw(command) {
            tracing::warn!(error = %e, "failed to render");
        }
    }
}
