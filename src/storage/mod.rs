//! Storage layer for the favorites list.
//!
//! This module provides a small key-value abstraction modelled on browser
//! local storage, two backends for it, and the favorites store built on top.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `json`: one JSON file per key with atomic writes
//! - `memory`: process-local map for ephemeral sessions and tests
//! - `favorites`: [`FavoritesSet`], [`toggle`] and [`FavoritesStore`]

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{toggle, FavoritesSet, FavoritesStore, DEFAULT_FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
