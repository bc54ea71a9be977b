//! Optimization rule model and DTOs.

use eva_core::types::RuleId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One rule in a section's ordered list, as stored under the section's key.
///
/// `id` is stable for the rule's lifetime; `rank` is the 1-based display
/// position and is reassigned on every structural mutation so that a
/// section's ranks are always exactly `1..=len`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRule {
    pub id: RuleId,
    pub rank: u32,
    pub title: String,
    pub action_description: String,
    pub condition_description: String,
}

impl OptimizationRule {
    /// Build a new rule from a create DTO at the given display rank, with a
    /// freshly assigned identity.
    pub fn from_create(rank: u32, create: CreateRule) -> Self {
        Self {
            id: Uuid::new_v4(),
            rank,
            title: create.title,
            action_description: create.action_description,
            condition_description: create.condition_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for creating a rule via the custom builder. Identity and rank are
/// assigned by the rule list, not the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRule {
    pub title: String,
    #[serde(default)]
    pub action_description: String,
    #[serde(default)]
    pub condition_description: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
