//! One console session: every engine wired to one store and one notifier.

use std::sync::Arc;

use eva_store::{JsonFileStore, KeyValueStore, StoreError};

use crate::config::ConsoleConfig;
use crate::decisions::DecisionTable;
use crate::notify::{Notifier, TracingNotifier};
use crate::onboarding::OnboardingFlow;
use crate::rules::RuleListManager;
use crate::scopes::ScopeSession;
use crate::settings::SettingsManager;

/// The console's engines, loaded together over a shared store.
///
/// The scope session starts from the onboarding selection; everything else
/// loads its own store key independently.
pub struct ConsoleSession {
    pub rules: RuleListManager,
    pub decisions: DecisionTable,
    pub settings: SettingsManager,
    pub onboarding: OnboardingFlow,
    pub scopes: ScopeSession,
}

impl ConsoleSession {
    /// Open a session over `store`, announcing through `notifier`.
    pub fn open(
        config: &ConsoleConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let rules = RuleListManager::load(store.clone(), notifier.clone());
        let mut decisions = DecisionTable::load(store.clone(), notifier.clone());
        decisions.set_page_size(config.page_size);
        let settings = SettingsManager::load(store.clone(), notifier.clone());
        let onboarding = OnboardingFlow::load(store, notifier);
        let scopes = ScopeSession::new(onboarding.selected_scope_ids());
        Self {
            rules,
            decisions,
            settings,
            onboarding,
            scopes,
        }
    }

    /// Open a session against the JSON-file store named by the environment,
    /// with notifications going to the log.
    pub fn open_from_env() -> Result<Self, StoreError> {
        let config = ConsoleConfig::from_env();
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.store_path)?);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
        Ok(Self::open(&config, store, notifier))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
