//! Remote catalog abstraction.
//!
//! This module defines the [`Catalog`] trait the controller's worker talks to,
//! and the [`ListRequest`] value describing which page of which list to fetch.
//! The HTTP implementation lives in [`tmdb`].
//!
//! # Contract
//!
//! - List operations return the movies of one page in catalog order.
//! - Failures come back as [`CatalogError`] values; nothing retries.
//! - [`Catalog::get_trailer`] never fails: a failed video lookup or an empty
//!   candidate list both yield `None`.

pub mod tmdb;

pub use tmdb::TmdbCatalog;

use crate::domain::{select_trailer, CatalogResult, Movie, MovieId, Trailer};
use async_trait::async_trait;

/// Which list page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// A page of the popular titles list.
    Popular {
        /// One-based page number.
        page: u32,
    },
    /// A page of server-side search results.
    Search {
        /// Trimmed, non-empty search term.
        term: String,
        /// One-based page number.
        page: u32,
    },
}

impl ListRequest {
    /// Page number carried by the request.
    #[must_use]
    pub const fn page(&self) -> u32 {
        match self {
            Self::Popular { page } | Self::Search { page, .. } => *page,
        }
    }

    /// Whether this is a search request.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }
}

/// Abstraction over the remote movie catalog.
///
/// Implementations must be shareable across spawned tasks. Every operation
/// suspends on network I/O.
///
/// # Implementations
///
/// - [`TmdbCatalog`]: TMDB v3 over HTTPS
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches one page of popular titles.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`](crate::domain::CatalogError) on transport
    /// failure, non-success status or an undecodable body.
    async fn list_popular(&self, page: u32) -> CatalogResult<Vec<Movie>>;

    /// Fetches one page of search results for `term`.
    ///
    /// # Errors
    ///
    /// Same failure shape as [`Catalog::list_popular`].
    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<Movie>>;

    /// Fetches the full record of a single movie.
    ///
    /// # Errors
    ///
    /// Same failure shape as [`Catalog::list_popular`].
    async fn get_detail(&self, id: MovieId) -> CatalogResult<Movie>;

    /// Fetches every video attached to a movie, in catalog order.
    ///
    /// # Errors
    ///
    /// Same failure shape as [`Catalog::list_popular`].
    async fn list_videos(&self, id: MovieId) -> CatalogResult<Vec<Trailer>>;

    /// Looks up the trailer to show for a movie.
    ///
    /// Absorbs lookup failures: a missing trailer is a normal outcome.
    async fn get_trailer(&self, id: MovieId) -> Option<Trailer> {
        match self.list_videos(id).await {
            Ok(videos) => {
                let trailer = select_trailer(&videos).cloned();
                tracing::debug!(
                    movie_id = %id,
                    candidates = videos.len(),
                    found = trailer.is_some(),
                    "trailer lookup complete"
                );
                trailer
            }
            Err(e) => {
                tracing::warn!(movie_id = %id, error = %e, "trailer lookup failed");
                None
            }
        }
    }

    /// Dispatches a [`ListRequest`] to the matching list operation.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying operation.
    async fn list(&self, request: &ListRequest) -> CatalogResult<Vec<Movie>> {
        match request {
            ListRequest::Popular { page } => self.list_popular(*page).await,
            ListRequest::Search { term, page } => self.search(term, *page).await,
        }
    }
}
