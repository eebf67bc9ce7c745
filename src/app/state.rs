//! Application state container.
//!
//! This module defines [`AppState`], the single source of truth for everything
//! the controller knows: which view is active, the Home view's search context,
//! what is currently displayed, the cached favorites and the generation
//! counters guarding in-flight requests.
//!
//! # State Components
//!
//! - **View**: Home, Details or Favorites
//! - **Search**: page and term for the Home view
//! - **Displayed**: movies currently shown in the list pane
//! - **Detail**: movie and trailer currently shown in the detail pane
//! - **Favorites**: last known favorites, refreshed from the store on every use
//! - **Generations**: per-slot counters for discarding stale responses
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{AppState, SearchPolicy, ViewState};
//!
//! let state = AppState::new(SearchPolicy::default());
//! assert_eq!(state.view, ViewState::Home);
//! assert!(!state.load_more_visible);
//! ```

use super::generation::Generations;
use super::modes::{ReturnView, SearchContext, ViewState};
use crate::domain::{Movie, Trailer};
use crate::storage::FavoritesSet;
use crate::ui::viewmodel::FavoriteLabel;
use std::time::Duration;

/// Default quiet period before typed input is evaluated.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Default minimum trimmed length of a typed search term.
pub const DEFAULT_MIN_SEARCH_LEN: usize = 3;

/// What typed input resolves to once the quiet period has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntent {
    /// Search for the trimmed term.
    Search(String),
    /// Input was cleared: go back to popular titles.
    Home,
    /// Too short to act on.
    Ignore,
}

/// Rules for typed (debounced) search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Quiet period after the last keystroke.
    pub quiet_period: Duration,

    /// Minimum trimmed length, in characters, that triggers a search.
    pub min_term_len: usize,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_SEARCH_DELAY,
            min_term_len: DEFAULT_MIN_SEARCH_LEN,
        }
    }
}

impl SearchPolicy {
    /// Classifies settled input.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::app::state::{InputIntent, SearchPolicy};
    ///
    /// let policy = SearchPolicy::default();
    /// assert_eq!(policy.classify("  "), InputIntent::Home);
    /// assert_eq!(policy.classify("al"), InputIntent::Ignore);
    /// assert_eq!(policy.classify(" alien "), InputIntent::Search("alien".into()));
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> InputIntent {
        let term = text.trim();
        match term.chars().count() {
            0 => InputIntent::Home,
            len if len < self.min_term_len => InputIntent::Ignore,
            _ => InputIntent::Search(term.to_string()),
        }
    }
}

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active view.
    pub view: ViewState,

    /// Page and term for the Home view.
    pub search: SearchContext,

    /// List context a Details view returns to.
    pub return_to: ReturnView,

    /// Movies currently in the list pane, in display order.
    pub displayed: Vec<Movie>,

    /// Whether the load-more control is shown.
    ///
    /// True only after a non-empty page arrived for the Home view, false
    /// while a list request is in flight.
    pub load_more_visible: bool,

    /// Whether a list or detail request is in flight.
    pub loading: bool,

    /// Current list heading.
    pub heading: String,

    /// Current content of the search input.
    pub input: String,

    /// Movie shown in the detail pane, once loaded.
    pub detail: Option<Movie>,

    /// Trailer of the movie in the detail pane.
    pub trailer: Option<Trailer>,

    /// Last known favorites.
    pub favorites: FavoritesSet,

    /// Stale-response guard.
    pub generations: Generations,

    /// Debounced input rules.
    pub policy: SearchPolicy,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SearchPolicy::default())
    }
}

impl AppState {
    /// Creates the startup state: Home view, popular list, page 1.
    #[must_use]
    pub fn new(policy: SearchPolicy) -> Self {
        Self {
            view: ViewState::Home,
            search: SearchContext::new(),
            return_to: ReturnView::Home,
            displayed: Vec::new(),
            load_more_visible: false,
            loading: false,
            heading: String::new(),
            input: String::new(),
            detail: None,
            trailer: None,
            favorites: FavoritesSet::default(),
            generations: Generations::default(),
            policy,
        }
    }

    /// Label of the favorite action for the movie in the detail pane.
    #[must_use]
    pub fn favorite_label(&self) -> Option<FavoriteLabel> {
        self.detail
            .as_ref()
            .map(|movie| FavoriteLabel::for_membership(self.favorites.contains(movie.id)))
    }
}
