//! Campaign scope model.

use serde::{Deserialize, Serialize};

/// A campaign-type category a custom rule can be restricted to.
///
/// The catalog is fixed (see `crate::seed`); only `selected` changes, and
/// only within a builder session. The onboarding-selected subset is
/// persisted as a plain id list, not as this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignScope {
    pub id: String,
    pub category: String,
    /// Sub-type within the category; empty for category-wide scopes.
    #[serde(rename = "type")]
    pub scope_type: String,
    pub description: String,
    pub selected: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
