//! Optimization sections.
//!
//! Every optimization rule belongs to exactly one named section. The set of
//! sections is closed, so section-keyed state lives in maps keyed by this
//! enum rather than by free-form strings.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four rule sections of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationSection {
    DailyBidding,
    InventoryGuard,
    Negating,
    CampaignCreation,
}

/// All sections, in display order.
pub const ALL_SECTIONS: [OptimizationSection; 4] = [
    OptimizationSection::DailyBidding,
    OptimizationSection::InventoryGuard,
    OptimizationSection::Negating,
    OptimizationSection::CampaignCreation,
];

impl OptimizationSection {
    /// Parse a section string as stored in the key-value store.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "daily-bidding" => Ok(Self::DailyBidding),
            "inventory-guard" => Ok(Self::InventoryGuard),
            "negating" => Ok(Self::Negating),
            "campaign-creation" => Ok(Self::CampaignCreation),
            _ => Err(CoreError::Validation(format!(
                "Invalid section '{s}'. Must be one of: daily-bidding, \
                 inventory-guard, negating, campaign-creation"
            ))),
        }
    }

    /// Convert to the store-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyBidding => "daily-bidding",
            Self::InventoryGuard => "inventory-guard",
            Self::Negating => "negating",
            Self::CampaignCreation => "campaign-creation",
        }
    }

    /// Human-readable label for the section.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyBidding => "Daily Bidding",
            Self::InventoryGuard => "Inventory Guard",
            Self::Negating => "Negation",
            Self::CampaignCreation => "Campaign Creation",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
