//! Theme selection and preference persistence for pkgdocs.
//!
//! Two layers form the API:
//!
//! - [`PreferenceStore`]: string key-value persistence that outlives a single
//!   page load
//! - [`ThemeStore`]: reads and writes a [`ThemeState`] under one fixed key
//!
//! # Implementations
//!
//! - [`FilePreferenceStore`]: one file per key inside a state directory
//! - [`MemoryPreferenceStore`]: in-memory fake (behind the `mock` feature)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pkgdocs_theme::{FilePreferenceStore, ThemeState, ThemeStore};
//!
//! let dir = std::env::temp_dir().join("pkgdocs-doc-example");
//! let store = ThemeStore::new(Arc::new(FilePreferenceStore::new(dir)));
//! store.set_theme(ThemeState::Dark);
//! assert_eq!(store.get_theme(), ThemeState::Dark);
//! ```

mod file;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod state;

use std::sync::Arc;

pub use file::FilePreferenceStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MemoryPreferenceStore;
pub use state::{ThemeState, UnknownTheme};

/// Key the theme is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "pkgdocs-theme";

/// Persistent string key-value store.
///
/// Implementations are best effort: `set` never reports failure to the caller
/// and `get` treats unreadable entries as absent.
pub trait PreferenceStore: Send + Sync {
    /// Retrieve the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str);
}

/// Reads and writes the theme preference under a fixed key.
pub struct ThemeStore {
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl ThemeStore {
    /// Create a theme store using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a theme store that persists under `key`.
    #[must_use]
    pub fn with_key(store: Arc<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted theme.
    ///
    /// Absent, empty, and unrecognized values all yield [`ThemeState::Light`].
    pub fn get_theme(&self) -> ThemeState {
        let Some(raw) = self.store.get(&self.key) else {
            tracing::debug!(key = %self.key, "no stored theme, using light");
            return ThemeState::Light;
        };
        raw.parse::<ThemeState>().unwrap_or_else(|_| {
            tracing::debug!(key = %self.key, value = %raw, "unrecognized stored theme, using light");
            ThemeState::Light
        })
    }

    /// Persist `value`, overwriting any prior value.
    pub fn set_theme(&self, value: ThemeState) {
        self.store.set(&self.key, value.as_str());
    }
}
