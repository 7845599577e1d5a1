//! File-based preference store.
//!
//! Each key is a file inside the state directory whose content is the value:
//!
//! ```text
//! {dir}/
//! +-- pkgdocs-theme      # contains "dark" or "light"
//! ```
//!
//! The directory is created on first write. Failures are logged and never
//! returned, the preference simply does not persist.

use std::fs;
use std::path::PathBuf;

use crate::PreferenceStore;

/// [`PreferenceStore`] rooted at a directory on disk.
#[derive(Debug)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store that keeps its files in `dir`.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(self.dir.join(key)).ok()?;
        Some(content.trim().to_owned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), "failed to create preference directory: {e}");
            return;
        }
        let path = self.dir.join(key);
        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(path = %path.display(), "failed to persist preference: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let tmp = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(tmp.path().join("state"));

        store.set("pkgdocs-theme", "dark");
        assert_eq!(store.get("pkgdocs-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_get_missing_key() {
        let tmp = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(tmp.path().to_path_buf());

        assert_eq!(store.get("pkgdocs-theme"), None);
    }

    #[test]
    fn test_overwrite() {
        let tmp = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(tmp.path().to_path_buf());

        store.set("k", "dark");
        store.set("k", "light");
        assert_eq!(store.get("k").as_deref(), Some("light"));
    }

    #[test]
    fn test_survives_new_instance() {
        let tmp = TempDir::new().unwrap();
        FilePreferenceStore::new(tmp.path().to_path_buf()).set("k", "dark");

        let reopened = FilePreferenceStore::new(tmp.path().to_path_buf());
        assert_eq!(reopened.get("k").as_deref(), Some("dark"));
    }

    #[test]
    fn test_trims_hand_edited_value() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("k"), "dark\n").unwrap();

        let store = FilePreferenceStore::new(tmp.path().to_path_buf());
        assert_eq!(store.get("k").as_deref(), Some("dark"));
    }

    #[test]
    fn test_unwritable_dir_is_silent() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // A regular file where the directory should be.
        let store = FilePreferenceStore::new(blocker.join("state"));
        store.set("k", "dark");
        assert_eq!(store.get("k"), None);
    }
}
