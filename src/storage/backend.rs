//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait: a durable string store
//! addressed by key. The favorites list is its only tenant today, serialized
//! to JSON by [`FavoritesStore`](crate::storage::FavoritesStore).
//!
//! # Design Philosophy
//!
//! The trait mirrors the browser's local storage: whole values in, whole
//! values out, no partial updates. Encoding is the caller's business.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local map, shared between clones
///
/// # Examples
///
/// ```
/// use marquee::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.save("favoriteMovies", "[]")?;
/// assert_eq!(store.load("favoriteMovies")?.as_deref(), Some("[]"));
/// assert!(store.load("missing")?.is_none());
/// # Ok::<(), marquee::MarqueeError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is rejected or the read fails.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is rejected or the write fails. A failed
    /// write never leaves a partially written value behind.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
