//! First-run onboarding state.
//!
//! Three persisted values: whether setup has been completed, the chosen
//! management mode, and the campaign scopes the automation may touch.
//! `complete` writes all three together after validating the scope
//! selection against the catalog.

use std::sync::Arc;

use eva_core::error::CoreError;
use eva_core::onboarding::{validate_scope_selection, ManagementMode};
use eva_store::keys;
use eva_store::seed;
use eva_store::{KeyValueStore, KeyValueStoreExt};

use crate::notify::Notifier;

/// Owner of the onboarding flag, management mode, and scope selection.
pub struct OnboardingFlow {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    completed: bool,
    mode: ManagementMode,
    selected_scope_ids: Vec<String>,
}

impl OnboardingFlow {
    /// Load onboarding state from the store. A fresh store reports setup as
    /// incomplete, automated mode, and no selected scopes.
    pub fn load(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let completed = store.get_or(keys::ONBOARDING_COMPLETED, false);
        let mode = store.get_or(keys::MANAGEMENT_MODE, ManagementMode::default());
        let selected_scope_ids = store.get_or(keys::SELECTED_SCOPES, Vec::new());
        Self {
            store,
            notifier,
            completed,
            mode,
            selected_scope_ids,
        }
    }

    /// True once first-run setup has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The chosen management mode.
    pub fn mode(&self) -> ManagementMode {
        self.mode
    }

    /// Scope ids selected during onboarding.
    pub fn selected_scope_ids(&self) -> &[String] {
        &self.selected_scope_ids
    }

    /// Finish setup: validate the scope selection, persist all three
    /// values, and announce completion. Duplicate ids are collapsed,
    /// keeping first occurrence order.
    pub fn complete(
        &mut self,
        mode: ManagementMode,
        scope_ids: Vec<String>,
    ) -> Result<(), CoreError> {
        let catalog = seed::scope_catalog_ids();
        let known: Vec<&str> = catalog.iter().map(String::as_str).collect();
        validate_scope_selection(&scope_ids, &known)?;

        let mut selected = Vec::new();
        for id in scope_ids {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }

        self.completed = true;
        self.mode = mode;
        self.selected_scope_ids = selected;

        self.persist();
        tracing::info!(
            mode = mode.as_str(),
            scopes = self.selected_scope_ids.len(),
            "Onboarding completed"
        );
        self.notifier.success("Setup completed");
        Ok(())
    }

    fn persist(&self) {
        if let Err(error) = self.store.put(keys::ONBOARDING_COMPLETED, &self.completed) {
            tracing::warn!(%error, "failed to persist onboarding flag");
        }
        if let Err(error) = self.store.put(keys::MANAGEMENT_MODE, &self.mode) {
            tracing::warn!(%error, "failed to persist management mode");
        }
        if let Err(error) = self.store.put(keys::SELECTED_SCOPES, &self.selected_scope_ids) {
            tracing::warn!(%error, "failed to persist scope selection");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
