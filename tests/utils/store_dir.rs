use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding a store file
pub struct TestStoreDir {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestStoreDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            root_path,
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.root_path.join("store.json")
    }

    /// seed the store file directly, bypassing the editor
    pub fn seed(&self, entries: &[(&str, &str)]) {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        fs::write(self.store_path(), serde_json::to_string(&map).unwrap()).unwrap();
    }

    /// read the store file back as written on disk
    pub fn read_entry(&self, key: &str) -> Option<String> {
        let raw = fs::read_to_string(self.store_path()).ok()?;
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw).unwrap();
        map.get(key).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn path(&self) -> &Path {
        &self.root_path
    }
}
