//! Storage-key catalog.
//!
//! Every durable value has exactly one key listed here. Keys are dotted
//! paths namespaced under `eva.` so a shared store can host other tenants
//! without collisions. Renaming a key orphans existing data.

use eva_core::section::OptimizationSection;

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

/// `bool`: whether first-run setup has been completed.
pub const ONBOARDING_COMPLETED: &str = "eva.onboarding.completed";

/// [`eva_core::onboarding::ManagementMode`]: how decisions are applied.
pub const MANAGEMENT_MODE: &str = "eva.onboarding.management_mode";

/// `Vec<String>`: campaign-scope ids selected during onboarding.
pub const SELECTED_SCOPES: &str = "eva.onboarding.selected_scopes";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// [`crate::models::settings::BiddingSettings`]: store-wide bid/ACoS defaults.
pub const BIDDING_SETTINGS: &str = "eva.settings.bidding";

// ---------------------------------------------------------------------------
// Rules and decisions
// ---------------------------------------------------------------------------

/// `Vec<OptimizationRule>`: ordered daily-bidding rules.
pub const RULES_DAILY_BIDDING: &str = "eva.rules.daily-bidding";

/// `Vec<OptimizationRule>`: ordered inventory-guard rules.
pub const RULES_INVENTORY_GUARD: &str = "eva.rules.inventory-guard";

/// `Vec<OptimizationRule>`: ordered negation rules.
pub const RULES_NEGATING: &str = "eva.rules.negating";

/// `Vec<OptimizationRule>`: ordered campaign-creation rules.
pub const RULES_CAMPAIGN_CREATION: &str = "eva.rules.campaign-creation";

/// `Vec<AiDecision>`: the AI decision log.
pub const DECISION_LOG: &str = "eva.decisions.log";

/// The storage key holding the rule list of `section`.
pub fn rules_key(section: OptimizationSection) -> &'static str {
    match section {
        OptimizationSection::DailyBidding => RULES_DAILY_BIDDING,
        OptimizationSection::InventoryGuard => RULES_INVENTORY_GUARD,
        OptimizationSection::Negating => RULES_NEGATING,
        OptimizationSection::CampaignCreation => RULES_CAMPAIGN_CREATION,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
