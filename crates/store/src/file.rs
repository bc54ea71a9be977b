//! JSON-file-backed store.
//!
//! The whole store is one JSON object document on disk. It is read once at
//! open and rewritten in full on every set; the console's working set is a
//! handful of small values, so rewriting is cheaper than being clever.
//! One store file belongs to one `JsonFileStore` handle at a time.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::{Map, Value};

use crate::kv::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] persisted as a single JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing contents. A missing file
    /// is an empty store; a file that is not a JSON object is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes)? {
                Value::Object(map) => map,
                _ => {
                    return Err(StoreError::Io(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("store file {} is not a JSON object", path.display()),
                    )))
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(error) => return Err(error.into()),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened key-value store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path this store persists to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value);
        // The in-memory copy keeps the new value even when the flush fails;
        // the next successful set rewrites the whole document.
        self.flush(&entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
