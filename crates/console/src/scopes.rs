//! Campaign-scope picker for the custom-rule builder.
//!
//! A session-local copy of the scope catalog with the persisted onboarding
//! selection applied. Toggles here are transient; nothing is written back
//! by this engine.

use eva_core::error::CoreError;
use eva_store::models::scope::CampaignScope;
use eva_store::seed;

/// One builder session's view of the scope catalog.
pub struct ScopeSession {
    scopes: Vec<CampaignScope>,
}

impl ScopeSession {
    /// Start a session from the catalog, pre-selecting `selected_ids`.
    pub fn new(selected_ids: &[String]) -> Self {
        let mut scopes = seed::scope_catalog();
        for scope in &mut scopes {
            scope.selected = selected_ids.contains(&scope.id);
        }
        Self { scopes }
    }

    /// The catalog in display order, with session selection state.
    pub fn scopes(&self) -> &[CampaignScope] {
        &self.scopes
    }

    /// Flip the selection of one scope and return its new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CoreError> {
        let scope = self
            .scopes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "campaign scope",
                id: id.to_string(),
            })?;
        scope.selected = !scope.selected;
        Ok(scope.selected)
    }

    /// Ids of the scopes currently selected, in catalog order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.scopes
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.id.clone())
            .collect()
    }

    /// Number of scopes currently selected.
    pub fn selected_count(&self) -> usize {
        self.scopes.iter().filter(|s| s.selected).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
