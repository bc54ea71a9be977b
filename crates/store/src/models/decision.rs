//! AI decision model.

use chrono::NaiveDate;
use eva_core::decision::DecisionStatus;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One automated bid change, as stored in the decision log.
///
/// Decisions are created by the automation outside this console; the console
/// only reads them and flips `status` to reverted. `change_amount` and
/// `change_ratio` are denormalized from the bid pair at creation
/// (see `eva_core::decision`), negative meaning a decrease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDecision {
    pub id: String,
    pub goal_name: String,
    pub goal_level: String,
    pub optimization_name: String,
    pub optimization_period: String,
    pub campaign_name: String,
    pub campaign_platform: String,
    pub ad_group_name: String,
    pub ad_group_platform: String,
    pub target_type: String,
    pub target_name: String,
    pub rule_code: String,
    pub cost_type: String,
    pub decided_on: NaiveDate,
    pub campaign_created_on: NaiveDate,
    pub previous_bid: f64,
    pub new_bid: f64,
    pub change_amount: f64,
    pub change_ratio: f64,
    pub status: DecisionStatus,
}

impl AiDecision {
    /// The fields free-text filtering searches, in display order.
    pub fn filter_fields(&self) -> [&str; 3] {
        [&self.campaign_name, &self.target_name, &self.ad_group_name]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
