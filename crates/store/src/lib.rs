//! Persisted state for the Eva configuration console.
//!
//! Everything the console keeps between sessions goes through one
//! [`kv::KeyValueStore`]: a string-keyed map of JSON values with a
//! default-value fallback for absent keys. This crate provides the trait,
//! an in-memory implementation for tests, a JSON-file implementation for
//! durability, the storage-key catalog, the persisted model structs, and
//! the seed data a fresh install starts from.

pub mod file;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod models;
pub mod seed;

pub use file::JsonFileStore;
pub use kv::{KeyValueStore, KeyValueStoreExt, StoreError};
pub use memory::MemoryStore;
