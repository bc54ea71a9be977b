//! In-memory store used by tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::kv::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a plain map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
