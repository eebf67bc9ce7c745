//! JSON file-based storage backend.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary file first and
//! are renamed into place, so a crash never leaves a half-written document.
//!
//! # Performance Characteristics
//!
//! - **Read**: one file read per `load`, no caching
//! - **Write**: O(n) in the value size, plus one rename
//! - **Best for**: small documents written on user action (favorites)

use crate::domain::error::{MarqueeError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Extension appended to every key file.
const FILE_EXTENSION: &str = "json";

/// JSON file storage backend.
///
/// # Key Rules
///
/// Keys become file names, so they are restricted to ASCII letters, digits,
/// `-` and `_`. Anything else is rejected with [`MarqueeError::Storage`].
///
/// # File Layout
///
/// ```text
/// ~/.local/share/marquee/
/// └── favoriteMovies.json
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Directory holding one file per key.
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use marquee::storage::JsonFileStore;
    ///
    /// let store = JsonFileStore::new("/tmp/marquee")?;
    /// # Ok::<(), marquee::MarqueeError>(())
    /// ```
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(dir = ?dir, "initializing JSON file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains characters outside
    /// `[A-Za-z0-9_-]`.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(MarqueeError::Storage(format!("invalid storage key: {key:?}")));
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("json_load", path = ?path).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "loaded stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no stored value");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _span = tracing::debug_span!("json_save", path = ?path, bytes = value.len()).entered();

        let tmp_path = path.with_extension(format!("{FILE_EXTENSION}.tmp"));

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("value saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        assert!(store.load("favoriteMovies").unwrap().is_none());
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested")).unwrap();

        store.save("favoriteMovies", "[1]").unwrap();
        store.save("favoriteMovies", "[2]").unwrap();

        assert_eq!(store.load("favoriteMovies").unwrap().as_deref(), Some("[2]"));
        let names: Vec<String> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["favoriteMovies.json".to_string()]);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "dots.json"] {
            assert!(matches!(store.save(key, "x"), Err(MarqueeError::Storage(_))), "{key}");
            assert!(store.load(key).is_err(), "{key}");
        }
    }
}
