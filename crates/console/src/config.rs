//! Console configuration loaded from environment variables.

use std::path::PathBuf;

/// Configuration for a console session.
///
/// All fields have defaults suitable for local development; override via
/// environment variables (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Where the JSON-file store lives (default: `eva-console.json`).
    pub store_path: PathBuf,
    /// Decision-table page size (default: `25`).
    pub page_size: usize,
}

impl ConsoleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default            |
    /// |------------------|--------------------|
    /// | `EVA_STORE_PATH` | `eva-console.json` |
    /// | `EVA_PAGE_SIZE`  | `25`               |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store_path: PathBuf = std::env::var("EVA_STORE_PATH")
            .unwrap_or_else(|_| "eva-console.json".into())
            .into();

        let page_size: usize = std::env::var("EVA_PAGE_SIZE")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("EVA_PAGE_SIZE must be a valid usize");

        Self {
            store_path,
            page_size,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("eva-console.json"),
            page_size: 25,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
