//! Small persistent key-value store holding user preferences between runs.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub const CARD_COUNT_KEY: &str = "cardCount";
pub const DEAL_MODE_KEY: &str = "dealMode";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value. The in-memory view is updated even when persisting
    /// fails.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// A single JSON object on disk, rewritten whole on every `set`
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Open `path`. A missing, unreadable or malformed file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load(&path);
        debug!(path = %path.display(), keys = values.len(), "opened store");
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> Map<String, Value> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Map::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read store, starting empty");
            return Map::new();
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!(path = %path.display(), "store is not a JSON object, starting empty");
            Map::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not parse store, starting empty");
            Map::new()
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(CARD_COUNT_KEY), None);
        store.set(CARD_COUNT_KEY, json!(40)).unwrap();
        assert_eq!(store.get(CARD_COUNT_KEY), Some(json!(40)));
    }

    #[test]
    fn test_file_store_persists_between_opens() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get(CARD_COUNT_KEY), None);
        store.set(CARD_COUNT_KEY, json!(99)).unwrap();
        store.set(DEAL_MODE_KEY, json!("triple")).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(CARD_COUNT_KEY), Some(json!(99)));
        assert_eq!(reopened.get(DEAL_MODE_KEY), Some(json!("triple")));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("store.json");

        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(CARD_COUNT_KEY), None);

        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(CARD_COUNT_KEY), None);
    }

    #[test]
    fn test_write_failure_keeps_value_in_memory() {
        let dir = TempDir::new().expect("temp dir");
        // a directory cannot be written as a file
        let mut store = JsonFileStore::open(dir.path());
        let result = store.set(CARD_COUNT_KEY, json!(12));
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(store.get(CARD_COUNT_KEY), Some(json!(12)));
    }
}
