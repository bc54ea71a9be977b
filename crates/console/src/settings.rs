//! Store-wide bidding settings.
//!
//! One document of global defaults (target ACoS plus the bid window).
//! Updates are patches: field ranges are checked on the DTO, then the
//! merged result is checked as a whole so the window stays consistent.
//! Nothing is written or announced unless every check passes.

use std::sync::Arc;

use eva_core::error::CoreError;
use eva_core::settings::{validate_bid, validate_bid_window, validate_target_acos};
use eva_store::keys;
use eva_store::models::settings::{BiddingSettings, UpdateSettings};
use eva_store::{KeyValueStore, KeyValueStoreExt};
use validator::Validate;

use crate::notify::Notifier;

/// Owner of the store-wide bidding settings.
pub struct SettingsManager {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    settings: BiddingSettings,
}

impl SettingsManager {
    /// Load settings from the store, falling back to the product defaults.
    pub fn load(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let settings: BiddingSettings =
            store.get_or(keys::BIDDING_SETTINGS, BiddingSettings::default());
        Self {
            store,
            notifier,
            settings,
        }
    }

    /// The current settings.
    pub fn settings(&self) -> &BiddingSettings {
        &self.settings
    }

    /// Apply a settings patch. The update is all-or-nothing: a failed check
    /// leaves the current settings untouched.
    pub fn update(&mut self, update: UpdateSettings) -> Result<(), CoreError> {
        update
            .validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;

        let mut next = self.settings.clone();
        next.apply(&update);
        validate_target_acos(next.target_acos)?;
        validate_bid("default_bid", next.default_bid)?;
        validate_bid("min_bid", next.min_bid)?;
        validate_bid("max_bid", next.max_bid)?;
        validate_bid_window(next.min_bid, next.default_bid, next.max_bid)?;

        self.settings = next;
        self.persist();
        tracing::info!(
            target_acos = self.settings.target_acos,
            default_bid = self.settings.default_bid,
            min_bid = self.settings.min_bid,
            max_bid = self.settings.max_bid,
            "Bidding settings updated"
        );
        self.notifier.success("Settings saved");
        Ok(())
    }

    fn persist(&self) {
        if let Err(error) = self.store.put(keys::BIDDING_SETTINGS, &self.settings) {
            tracing::warn!(%error, "failed to persist bidding settings");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
