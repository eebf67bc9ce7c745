//! Render commands and display-ready view types.
//!
//! The controller never draws anything itself. It emits [`RenderCommand`]
//! values, and whatever [`Renderer`](crate::ui::Renderer) is plugged in turns
//! them into output. View types here contain no business logic, only data
//! ready to be shown.
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::viewmodel::{FavoriteLabel, Pane, RenderCommand};
//!
//! let commands = vec![
//!     RenderCommand::ShowPane(Pane::Detail),
//!     RenderCommand::Loading(true),
//!     RenderCommand::FavoriteLabel(FavoriteLabel::Remove),
//! ];
//! assert_eq!(FavoriteLabel::Remove.text(), "Remove from Favorites");
//! # let _ = commands;
//! ```

use crate::app::modes::ListMode;
use crate::domain::{Movie, MovieId, Trailer};
use crate::ui::helpers::compute_highlight_ranges;

/// Heading shown over the popular list.
pub const POPULAR_HEADING: &str = "Popular Movies";

/// Heading shown over the favorites list.
pub const FAVORITES_HEADING: &str = "My Favorites";

/// Message shown when a list request fails.
pub const LIST_ERROR_MESSAGE: &str = "Failed to load movies. Please try again later.";

/// Message shown when a detail request fails.
pub const DETAIL_ERROR_MESSAGE: &str = "Could not load details.";

/// Message shown when a first search page comes back empty.
pub const NO_RESULTS_MESSAGE: &str = "No movies found. Try a different search term.";

/// Heading shown over search results.
#[must_use]
pub fn results_heading(term: &str) -> String {
    format!("Results for \"{term}\"")
}

/// Region of the screen a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Card grid with heading and load-more control.
    List,
    /// Single-movie detail.
    Detail,
}

/// Label of the favorite action in the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteLabel {
    /// Movie is not a favorite yet.
    Add,
    /// Movie is already a favorite.
    Remove,
}

impl FavoriteLabel {
    /// Label for a movie with the given membership.
    #[must_use]
    pub const fn for_membership(is_favorite: bool) -> Self {
        if is_favorite {
            Self::Remove
        } else {
            Self::Add
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Add => "Add to Favorites",
            Self::Remove => "Remove from Favorites",
        }
    }
}

/// Empty-state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary hint, may be empty.
    pub subtitle: String,
}

impl EmptyState {
    /// First search page returned nothing.
    #[must_use]
    pub fn no_results() -> Self {
        Self {
            message: NO_RESULTS_MESSAGE.to_string(),
            subtitle: String::new(),
        }
    }

    /// Favorites list is empty.
    #[must_use]
    pub fn no_favorites() -> Self {
        Self {
            message: "No favorites yet.".to_string(),
            subtitle: "Open a movie and choose \"Add to Favorites\" to keep it here.".to_string(),
        }
    }
}

/// Everything the detail pane shows for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub movie: Movie,

    /// Absent when no suitable video exists or the lookup failed.
    pub trailer: Option<Trailer>,

    pub favorite: FavoriteLabel,
}

/// One instruction for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Sets the list heading.
    Heading(String),

    /// Shows or hides the loading indicator.
    Loading(bool),

    /// Makes a pane the visible one.
    ShowPane(Pane),

    /// Shows movie cards.
    Movies {
        movies: Vec<Movie>,
        mode: ListMode,
        /// Search term to highlight inside titles.
        highlight: Option<String>,
    },

    /// Replaces the list with an empty-state message.
    Empty(EmptyState),

    /// Fills the detail pane.
    Detail(DetailView),

    /// Shows an inline error in place of a pane's content.
    Error { pane: Pane, message: String },

    /// Shows or hides the load-more control.
    LoadMore(bool),

    /// Updates the favorite action label of the open detail.
    FavoriteLabel(FavoriteLabel),

    /// Clears the search input.
    ClearInput,
}

/// Display information for a single movie card.
///
/// Contains pre-computed highlight ranges for the active search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    pub rating: String,

    /// Full poster URL, when the movie has one.
    pub poster_url: Option<String>,

    /// Character ranges to highlight in `title`.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end
    /// exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl CardItem {
    /// Builds the card for `movie`, highlighting `highlight` inside the title.
    #[must_use]
    pub fn from_movie(movie: &Movie, highlight: Option<&str>, image_base: &str) -> Self {
        let title = movie.title.clone();
        let highlight_ranges = highlight
            .filter(|term| !term.is_empty())
            .map_or_else(Vec::new, |term| compute_highlight_ranges(&title, term));

        Self {
            id: movie.id,
            year: movie.release_year(),
            rating: movie.rating_label(),
            poster_url: movie.poster_url(image_base),
            highlight_ranges,
            title,
        }
    }
}
