//! View and list-context state types for the application.
//!
//! This module defines the state machine enums that decide what the user is
//! looking at, and the [`SearchContext`] that determines which list page the
//! Home view fetches next.
//!
//! # State Machine
//!
//! Exactly one view is active:
//! - **Home**: popular titles or search results, paginated
//! - **Details**: a single movie, reached from a card
//! - **Favorites**: the persisted favorites list, never paginated
//!
//! # Example
//!
//! ```rust
//! use marquee::app::modes::{SearchContext, ViewState};
//! use marquee::catalog::ListRequest;
//!
//! let mut search = SearchContext::new();
//! search.begin_search("alien");
//! assert_eq!(search.request(), ListRequest::Search { term: "alien".into(), page: 1 });
//! assert_eq!(ViewState::default(), ViewState::Home);
//! ```

use crate::catalog::ListRequest;
use crate::domain::MovieId;

/// The active application view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Popular titles or search results.
    #[default]
    Home,

    /// Detail view of one movie.
    ///
    /// Any in-flight detail result for a different movie is discarded.
    Details(MovieId),

    /// The persisted favorites list.
    Favorites,
}

/// List context a Details view returns to on back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnView {
    /// Home with the search context that was active.
    #[default]
    Home,
    /// The favorites list.
    Favorites,
}

/// How a loaded list page is merged into the displayed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Page 1: the page becomes the whole displayed list.
    Replace,
    /// Later pages: appended after what is shown.
    Append,
}

impl ListMode {
    /// Mode implied by a one-based page number.
    #[must_use]
    pub const fn for_page(page: u32) -> Self {
        if page <= 1 {
            Self::Replace
        } else {
            Self::Append
        }
    }
}

/// Pagination and search term for the Home view.
///
/// The page is always at least 1. An empty term means the popular list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    page: u32,
    term: String,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    /// Popular list, page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: 1,
            term: String::new(),
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the context targets search results rather than popular titles.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.term.is_empty()
    }

    /// Back to the popular list, page 1.
    pub fn reset(&mut self) {
        self.page = 1;
        self.term.clear();
    }

    /// Back to page 1, keeping the term.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Switches to a new (already trimmed) term at page 1.
    pub fn begin_search(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Moves to the next page and returns it.
    pub fn advance(&mut self) -> u32 {
        self.page = self.page.saturating_add(1);
        self.page
    }

    /// Catalog request for the current page and term.
    #[must_use]
    pub fn request(&self) -> ListRequest {
        if self.term.is_empty() {
            ListRequest::Popular { page: self.page }
        } else {
            ListRequest::Search {
                term: self.term.clone(),
                page: self.page,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_then_new_term_resets_page() {
        let mut search = SearchContext::new();
        assert_eq!(search.advance(), 2);
        assert_eq!(search.advance(), 3);
        assert_eq!(search.request(), ListRequest::Popular { page: 3 });

        search.begin_search("dune");
        assert_eq!(search.page(), 1);
        assert!(search.is_searching());

        search.advance();
        search.reset();
        assert_eq!(search, SearchContext::new());
    }

    #[test]
    fn list_mode_follows_page() {
        assert_eq!(ListMode::for_page(1), ListMode::Replace);
        assert_eq!(ListMode::for_page(2), ListMode::Append);
    }
}
