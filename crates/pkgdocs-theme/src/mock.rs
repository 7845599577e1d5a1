//! In-memory preference store for testing.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::PreferenceStore;

/// Preference store that keeps values in memory.
///
/// # Example
///
/// ```ignore
/// use pkgdocs_theme::{MemoryPreferenceStore, PreferenceStore};
///
/// let store = MemoryPreferenceStore::new().with_value("pkgdocs-theme", "dark");
/// assert_eq!(store.get("pkgdocs-theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .write()
            .unwrap()
            .insert(key.into(), value.into());
        self
    }

    /// Number of `set` calls so far. Seeded values are not counted.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
    }
}
