//! Preference persistence.
//!
//! A minimal string key-value capability injected into components that
//! persist settings. `JsonFileStore` keeps a flat JSON object on disk;
//! `MemoryStore` backs tests.
//!
//! Structure:
//! - Pure functions: default path computation
//! - Effect functions: file read/write

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Application directory name under the platform config dir.
const APP_DIR: &str = "signup-page";

/// Preferences filename within the application directory.
const PREFERENCES_FILENAME: &str = "preferences.json";

/// Error reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read preferences at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write preferences at {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("preferences at {} are not a JSON object of strings: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Get/set over string keys and values.
pub trait PreferenceStore {
    /// Value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// HashMap-backed store. Never fails.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// JSON FILE STORE
// ============================================================================

/// Returns the default preferences file.
///
/// On macOS: ~/Library/Application Support/signup-page/preferences.json
/// On Linux: ~/.config/signup-page/preferences.json
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(PREFERENCES_FILENAME)
}

/// Flat `{"key": "value"}` JSON file. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(write_err)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(default_store_path())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    /// A file that is not a JSON object of strings is replaced rather
    /// than blocking every later write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e @ StorageError::Parse { .. }) => {
                warn!(error = %e, "discarding unreadable preferences");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_store_path_is_reasonable() {
        let path = default_store_path();
        let path_str = path.to_string_lossy();

        assert!(path_str.contains("signup-page"));
        assert!(path_str.ends_with("preferences.json"));
    }

    #[test]
    fn memory_store_get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn memory_store_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("absent.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_set_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("prefs.json");
        let mut store = JsonFileStore::new(&path);

        store.set("theme", "dark").unwrap();

        assert!(path.exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, r#"{"lang": "en"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("theme", "light").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_store_set_replaces_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "garbage").unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 1);
    }

    #[test]
    fn file_store_get_reports_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.get("theme").unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(err.to_string().contains("prefs.json"));
    }
}
