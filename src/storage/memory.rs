//! In-memory storage backend.
//!
//! Useful for ephemeral sessions and tests. Clones share the same map, so a
//! test can hand one clone to the controller and inspect the other.

use crate::domain::error::{MarqueeError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-local key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| MarqueeError::Storage(format!("memory store poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
