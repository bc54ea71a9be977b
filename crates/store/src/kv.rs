//! The key-value store contract.
//!
//! The console persists every durable value under a string key as JSON.
//! Reads never fail from the caller's perspective: an absent key yields the
//! caller's default, and a value that no longer deserializes is logged and
//! treated as absent rather than poisoning the console. Writes can fail
//! (I/O, serialization) and report [`StoreError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures raised by store implementations on write.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// A persisted string-keyed map of JSON values.
///
/// Implementations are internally synchronized so a single handle can be
/// shared behind `Arc<dyn KeyValueStore>`. The contract is synchronous;
/// durability strategy is the implementation's concern.
pub trait KeyValueStore: Send + Sync {
    /// The raw JSON value stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Typed convenience layer over the raw JSON surface.
///
/// Blanket-implemented for every store, including `dyn KeyValueStore`.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Deserialize the value under `key`, or fall back to `default` when the
    /// key is absent. A present value that fails to deserialize is logged at
    /// `warn` and treated as absent.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.get_raw(key) else {
            return default;
        };
        match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "stored value failed to deserialize, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`.
    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_value(value)?;
        self.set_raw(key, raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
