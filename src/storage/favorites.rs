//! Favorites persistence.
//!
//! Favorites are kept as an insertion-ordered list of full movie records,
//! serialized to JSON under a single storage key (`favoriteMovies` by
//! default). The list is read fresh on every use and rewritten whole on every
//! change.
//!
//! # Error Handling
//!
//! Favorites never fail loudly. A missing value reads as empty, a malformed
//! value reads as empty with a warning, and failed writes are logged and
//! dropped.

use crate::domain::error::{MarqueeError, Result};
use crate::domain::{Movie, MovieId};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage key used for the favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "favoriteMovies";

/// Ordered set of favorite movies, unique by id.
///
/// Serializes as a plain JSON array of movie records. Decoding keeps the first
/// occurrence of a repeated id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Movie>", into = "Vec<Movie>")]
pub struct FavoritesSet {
    movies: Vec<Movie>,
    #[serde(skip)]
    ids: HashSet<MovieId>,
}

impl FavoritesSet {
    /// Returns `true` if a movie with `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn push(&mut self, movie: Movie) {
        if self.ids.insert(movie.id) {
            self.movies.push(movie);
        }
    }

    fn remove(&mut self, id: MovieId) {
        if self.ids.remove(&id) {
            self.movies.retain(|movie| movie.id != id);
        }
    }
}

impl From<Vec<Movie>> for FavoritesSet {
    fn from(movies: Vec<Movie>) -> Self {
        let mut set = Self::default();
        for movie in movies {
            set.push(movie);
        }
        set
    }
}

impl From<FavoritesSet> for Vec<Movie> {
    fn from(set: FavoritesSet) -> Self {
        set.movies
    }
}

/// Returns `favorites` with `movie` added if absent, or removed if present.
///
/// Membership is by id. Added movies go to the end; removal keeps the
/// relative order of everything else.
///
/// # Examples
///
/// ```
/// use marquee::domain::{Movie, MovieId};
/// use marquee::storage::{toggle, FavoritesSet};
///
/// let matrix = Movie::new(MovieId(603), "The Matrix");
/// let added = toggle(&FavoritesSet::default(), &matrix);
/// assert!(added.contains(MovieId(603)));
///
/// let removed = toggle(&added, &matrix);
/// assert!(removed.is_empty());
/// ```
#[must_use]
pub fn toggle(favorites: &FavoritesSet, movie: &Movie) -> FavoritesSet {
    let mut next = favorites.clone();
    if next.contains(movie.id) {
        next.remove(movie.id);
    } else {
        next.push(movie.clone());
    }
    next
}

/// Durable favorites list on top of a [`KeyValueStore`].
pub struct FavoritesStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// Creates a store using the default `favoriteMovies` key.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self::with_key(backend, DEFAULT_FAVORITES_KEY)
    }

    /// Creates a store persisting under a custom key.
    pub fn with_key(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    /// Reads the persisted favorites.
    ///
    /// Absent or unreadable data yields an empty set.
    pub fn load(&self) -> FavoritesSet {
        match self.try_load() {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring unreadable favorites");
                FavoritesSet::default()
            }
        }
    }

    /// Reads the persisted favorites, surfacing malformed data.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::MalformedData`] if the stored value is not a
    /// JSON array of movie records, or the backend's error if the read fails.
    pub fn try_load(&self) -> Result<FavoritesSet> {
        let Some(raw) = self.backend.load(&self.key)? else {
            return Ok(FavoritesSet::default());
        };

        serde_json::from_str::<FavoritesSet>(&raw)
            .map_err(|e| MarqueeError::MalformedData(format!("favorites under {:?}: {e}", self.key)))
    }

    /// Persists `favorites`, replacing the stored list.
    ///
    /// Failures are logged and swallowed.
    pub fn save(&mut self, favorites: &FavoritesSet) {
        if let Err(e) = self.try_save(favorites) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist favorites");
        }
    }

    fn try_save(&mut self, favorites: &FavoritesSet) -> Result<()> {
        let raw = serde_json::to_string(favorites)
            .map_err(|e| MarqueeError::Storage(format!("failed to encode favorites: {e}")))?;
        self.backend.save(&self.key, &raw)?;
        tracing::debug!(count = favorites.len(), "favorites saved");
        Ok(())
    }

    /// Loads the list, applies `f`, persists the result and returns it.
    ///
    /// Malformed stored data is replaced. A failed read leaves storage
    /// untouched and returns an empty set, so a transient error cannot
    /// overwrite the saved list.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::domain::{Movie, MovieId};
    /// use marquee::storage::{toggle, FavoritesStore, MemoryStore};
    ///
    /// let mut store = FavoritesStore::new(MemoryStore::default());
    /// let movie = Movie::new(MovieId(1), "Alien");
    /// let favorites = store.update(|current| toggle(current, &movie));
    /// assert_eq!(store.load(), favorites);
    /// ```
    pub fn update<F>(&mut self, f: F) -> FavoritesSet
    where
        F: FnOnce(&FavoritesSet) -> FavoritesSet,
    {
        let current = match self.try_load() {
            Ok(favorites) => favorites,
            Err(e @ MarqueeError::MalformedData(_)) => {
                tracing::warn!(key = %self.key, error = %e, "replacing unreadable favorites");
                FavoritesSet::default()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "favorites read failed, leaving them untouched");
                return FavoritesSet::default();
            }
        };

        let next = f(&current);
        self.save(&next);
        next
    }
}
