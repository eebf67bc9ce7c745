//! Shared fixtures for integration tests: a scripted catalog and a renderer
//! that records every command.

#![allow(dead_code)]

use async_trait::async_trait;
use marquee::app::{Controller, SearchPolicy};
use marquee::catalog::Catalog;
use marquee::domain::{CatalogError, CatalogResult, Movie, MovieId, Trailer};
use marquee::storage::{FavoritesStore, MemoryStore};
use marquee::ui::{DetailView, RenderCommand, Renderer};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A canned catalog answer, delivered after `delay`.
#[derive(Debug, Clone)]
struct Scripted<T> {
    result: CatalogResult<T>,
    delay: Duration,
}

/// Catalog returning scripted answers and logging every call.
///
/// Unscripted lists are empty, unscripted details fail with a 404 and
/// unscripted videos are empty.
#[derive(Debug, Default)]
pub struct MockCatalog {
    popular: HashMap<u32, Scripted<Vec<Movie>>>,
    searches: HashMap<(String, u32), Scripted<Vec<Movie>>>,
    details: HashMap<MovieId, Scripted<Movie>>,
    videos: HashMap<MovieId, CatalogResult<Vec<Trailer>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn popular(self, page: u32, movies: Vec<Movie>) -> Self {
        self.popular_after(page, movies, Duration::ZERO)
    }

    pub fn popular_after(mut self, page: u32, movies: Vec<Movie>, delay: Duration) -> Self {
        self.popular.insert(page, Scripted { result: Ok(movies), delay });
        self
    }

    pub fn popular_fails(mut self, page: u32, error: CatalogError) -> Self {
        self.popular.insert(
            page,
            Scripted {
                result: Err(error),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn search(self, term: &str, page: u32, movies: Vec<Movie>) -> Self {
        self.search_after(term, page, movies, Duration::ZERO)
    }

    pub fn search_after(mut self, term: &str, page: u32, movies: Vec<Movie>, delay: Duration) -> Self {
        self.searches
            .insert((term.to_string(), page), Scripted { result: Ok(movies), delay });
        self
    }

    pub fn detail(self, movie: Movie) -> Self {
        self.detail_after(movie, Duration::ZERO)
    }

    pub fn detail_after(mut self, movie: Movie, delay: Duration) -> Self {
        self.details.insert(movie.id, Scripted { result: Ok(movie), delay });
        self
    }

    pub fn videos(mut self, id: MovieId, videos: CatalogResult<Vec<Trailer>>) -> Self {
        self.videos.insert(id, videos);
        self
    }

    /// Handle onto the call log that stays valid after the catalog is moved.
    pub fn call_log(&self) -> CallLog {
        CallLog(Arc::clone(&self.calls))
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn deliver<T: Clone>(scripted: Option<&Scripted<T>>, fallback: CatalogResult<T>) -> CatalogResult<T> {
    match scripted {
        Some(scripted) => {
            if !scripted.delay.is_zero() {
                tokio::time::sleep(scripted.delay).await;
            }
            scripted.result.clone()
        }
        None => fallback,
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn list_popular(&self, page: u32) -> CatalogResult<Vec<Movie>> {
        self.record(format!("popular {page}"));
        deliver(self.popular.get(&page), Ok(Vec::new())).await
    }

    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<Movie>> {
        self.record(format!("search {term} {page}"));
        deliver(self.searches.get(&(term.to_string(), page)), Ok(Vec::new())).await
    }

    async fn get_detail(&self, id: MovieId) -> CatalogResult<Movie> {
        self.record(format!("detail {id}"));
        deliver(self.details.get(&id), Err(CatalogError::Remote { status: 404 })).await
    }

    async fn list_videos(&self, id: MovieId) -> CatalogResult<Vec<Trailer>> {
        self.record(format!("videos {id}"));
        self.videos.get(&id).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Shared view of a [`MockCatalog`]'s calls.
#[derive(Debug, Clone)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Calls whose description starts with `prefix`.
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.calls().into_iter().filter(|call| call.starts_with(prefix)).collect()
    }
}

/// Renderer keeping every command it receives.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCommand>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, command: &RenderCommand) {
        self.commands.push(command.clone());
    }
}

impl RecordingRenderer {
    pub fn contains(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    pub fn last_detail(&self) -> Option<&DetailView> {
        self.commands.iter().rev().find_map(|command| match command {
            RenderCommand::Detail(detail) => Some(detail),
            _ => None,
        })
    }

    pub fn last_heading(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            RenderCommand::Heading(heading) => Some(heading.as_str()),
            _ => None,
        })
    }

    /// Last load-more visibility sent.
    pub fn load_more(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|command| match command {
            RenderCommand::LoadMore(visible) => Some(*visible),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

pub fn movies(ids: std::ops::Range<u64>) -> Vec<Movie> {
    ids.map(|id| Movie::new(MovieId(id), format!("Movie {id}"))).collect()
}

/// Controller over `catalog` and an in-memory favorites store.
///
/// The returned store shares its contents with the controller's.
pub fn controller(catalog: MockCatalog) -> (Controller<RecordingRenderer>, MemoryStore) {
    let store = MemoryStore::default();
    let controller = Controller::new(
        Arc::new(catalog),
        FavoritesStore::new(store.clone()),
        RecordingRenderer::default(),
        SearchPolicy::default(),
    );
    (controller, store)
}
