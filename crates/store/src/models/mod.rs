//! Persisted model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` struct matching the stored JSON shape
//! - Create/update DTOs where the console mutates the model
//!
//! Persisted field names are camelCase because the store documents predate
//! this crate; the Rust structs rename rather than break existing data.

pub mod decision;
pub mod rule;
pub mod scope;
pub mod settings;
