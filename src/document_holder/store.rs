use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::app_error::{AppError, AppResult};

/// Durable filename → content mapping
///
/// The editor only reads, writes and enumerates; nothing is ever deleted.
/// Callers must not rely on the order of [`KeyValueStore::keys`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Store kept as a single JSON object on disk
///
/// Every `set` rewrites the file through a sibling temp file and a rename.
///
/// # Fields
///
/// - `path`: Location of the JSON file
/// - `entries`: Loaded entries, sorted by name
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`
    ///
    /// # Returns
    ///
    /// Returns `AppResult<Self>` which may contain:
    /// - `AppError::Storage`: If the file exists but cannot be read or parsed
    ///
    /// A missing file is an empty store; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                AppError::Storage(format!("Unable to read {}: {e}", path.display()))
            })?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| {
                    AppError::Storage(format!("Corrupt store {}: {e}", path.display()))
                })?
            }
        } else {
            BTreeMap::new()
        };
        info!(target: "store", path = %path.display(), entries = entries.len(), "store_opened");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Storage(format!("Unable to create {}: {e}", parent.display()))
                })?;
            }
        }
        let serialized = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::Storage(format!("Unable to serialize store: {e}")))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, serialized).map_err(|e| {
            AppError::Storage(format!("Unable to write {}: {e}", tmp_path.display()))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AppError::Storage(format!("Unable to replace {}: {e}", self.path.display()))
        })?;
        debug!(target: "store", path = %self.path.display(), "store_flushed");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// Restores the previous value when the flush fails.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.keys().unwrap().is_empty());
        store.set("a.txt", "one").unwrap();
        store.set("a.txt", "two").unwrap();
        assert_eq!(store.get("a.txt").unwrap(), Some("two".into()));
        assert_eq!(store.get("b.txt").unwrap(), None);
        assert_eq!(store.keys().unwrap(), vec!["a.txt".to_string()]);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");
        {
            let mut store = FileStore::open(&path).unwrap();
            assert!(store.keys().unwrap().is_empty());
            store.set("b.txt", "bee").unwrap();
            store.set("a.txt", "ay").unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a.txt", "b.txt"]);
        assert_eq!(store.get("b.txt").unwrap(), Some("bee".into()));
        assert!(!dir.path().join("nested").join("store.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(err.is_storage(), "{err}");
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        // parent is a regular file, so creating the directory fails
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = FileStore::open(blocker.join("store.json")).unwrap();
        let err = store.set("a.txt", "content").unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.get("a.txt").unwrap(), None);
    }
}
