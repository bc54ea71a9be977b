//! Seed data for a fresh install.
//!
//! A store with no history still needs something to show: the stock rule
//! set Eva ships per section, the campaign-scope catalog the custom-rule
//! builder offers, and the sample decision log the demo environment uses.
//! Seeds are generated, not stored; they are only written back once the
//! user first mutates them.

use chrono::NaiveDate;
use eva_core::decision::{change_amount, change_ratio, DecisionStatus};
use eva_core::section::OptimizationSection;
use uuid::Uuid;

use crate::models::decision::AiDecision;
use crate::models::rule::OptimizationRule;
use crate::models::scope::CampaignScope;

// ---------------------------------------------------------------------------
// Default rules
// ---------------------------------------------------------------------------

fn rule(rank: u32, title: &str, action: &str, condition: &str) -> OptimizationRule {
    OptimizationRule {
        id: Uuid::new_v4(),
        rank,
        title: title.to_string(),
        action_description: action.to_string(),
        condition_description: condition.to_string(),
    }
}

/// The stock rule list for `section`. Identities are freshly assigned on
/// every call; ranks are contiguous from 1.
pub fn default_rules(section: OptimizationSection) -> Vec<OptimizationRule> {
    match section {
        OptimizationSection::DailyBidding => vec![
            rule(
                1,
                "Lower bids on high-ACoS targets",
                "Decrease the bid by 10%",
                "ACoS above target for 7 consecutive days",
            ),
            rule(
                2,
                "Raise bids on converting keywords",
                "Increase the bid by 5%",
                "3 or more orders in the last 7 days and ACoS under target",
            ),
            rule(
                3,
                "Hold strong top-of-search placements",
                "Keep the bid at its current value",
                "Top-of-search impression share above 20%",
            ),
        ],
        OptimizationSection::InventoryGuard => vec![
            rule(
                1,
                "Throttle ads on low stock",
                "Reduce the daily budget by 50%",
                "Sellable units cover fewer than 14 days",
            ),
            rule(
                2,
                "Pause ads when out of stock",
                "Pause the campaign",
                "Inventory level reaches zero",
            ),
        ],
        OptimizationSection::Negating => vec![
            rule(
                1,
                "Negate wasted-spend search terms",
                "Add the search term as a negative exact match",
                "20 or more clicks and no orders in 30 days",
            ),
            rule(
                2,
                "Negate high-ACoS search terms",
                "Add the search term as a negative phrase match",
                "ACoS above twice the target over 30 days",
            ),
        ],
        OptimizationSection::CampaignCreation => vec![
            rule(
                1,
                "Launch campaigns for new products",
                "Create an auto campaign with the default bid",
                "Product listed for fewer than 30 days and has no campaign",
            ),
            rule(
                2,
                "Promote winning search terms",
                "Create a single-keyword exact campaign",
                "Search term has 3 or more orders in 14 days",
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Scope catalog
// ---------------------------------------------------------------------------

fn scope(id: &str, category: &str, scope_type: &str, description: &str) -> CampaignScope {
    CampaignScope {
        id: id.to_string(),
        category: category.to_string(),
        scope_type: scope_type.to_string(),
        description: description.to_string(),
        selected: false,
    }
}

/// The campaign-scope catalog offered by the custom-rule builder and the
/// onboarding scope picker. Nothing starts selected.
pub fn scope_catalog() -> Vec<CampaignScope> {
    vec![
        scope(
            "sp-auto",
            "Sponsored Products",
            "Auto",
            "Automatic targeting campaigns",
        ),
        scope(
            "sp-keyword",
            "Sponsored Products",
            "Keyword",
            "Manual keyword targeting campaigns",
        ),
        scope(
            "sp-product",
            "Sponsored Products",
            "Product",
            "Product and category targeting campaigns",
        ),
        scope("sb", "Sponsored Brands", "", "All Sponsored Brands campaigns"),
        scope("sd", "Sponsored Display", "", "All Sponsored Display campaigns"),
    ]
}

/// Ids of every scope in the catalog, for selection validation.
pub fn scope_catalog_ids() -> Vec<String> {
    scope_catalog().into_iter().map(|s| s.id).collect()
}

// ---------------------------------------------------------------------------
// Sample decision log
// ---------------------------------------------------------------------------

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The decision log the demo environment starts from. Delta fields are
/// derived from the bid pair so the sample stays internally consistent.
pub fn sample_decisions() -> Vec<AiDecision> {
    let mut decisions = vec![
        AiDecision {
            id: "dec-001".to_string(),
            goal_name: "Grow steamer sales".to_string(),
            goal_level: "Product".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva - SP - AI - B0018XC8G6".to_string(),
            campaign_platform: "SP".to_string(),
            ad_group_name: "Exact match".to_string(),
            ad_group_platform: "SP".to_string(),
            target_type: "Keyword".to_string(),
            target_name: "garment steamer".to_string(),
            rule_code: "DB-104".to_string(),
            cost_type: "CPC".to_string(),
            decided_on: date(2024, 12, 15),
            campaign_created_on: date(2024, 9, 2),
            previous_bid: 2.38,
            new_bid: 2.14,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Applied,
        },
        AiDecision {
            id: "dec-002".to_string(),
            goal_name: "Grow steamer sales".to_string(),
            goal_level: "Product".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva | Standing Garment Steamer".to_string(),
            campaign_platform: "SP".to_string(),
            ad_group_name: "Broad match".to_string(),
            ad_group_platform: "SP".to_string(),
            target_type: "Keyword".to_string(),
            target_name: "steamer for clothes".to_string(),
            rule_code: "DB-102".to_string(),
            cost_type: "CPC".to_string(),
            decided_on: date(2024, 12, 15),
            campaign_created_on: date(2024, 6, 21),
            previous_bid: 0.86,
            new_bid: 0.99,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Applied,
        },
        AiDecision {
            id: "dec-003".to_string(),
            goal_name: "Grow steamer sales".to_string(),
            goal_level: "Product".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva - SP - AI - B07GVC9L2T".to_string(),
            campaign_platform: "SP".to_string(),
            ad_group_name: "Phrase match".to_string(),
            ad_group_platform: "SP".to_string(),
            target_type: "Keyword".to_string(),
            target_name: "handheld steamer".to_string(),
            rule_code: "DB-104".to_string(),
            cost_type: "CPC".to_string(),
            decided_on: date(2024, 12, 16),
            campaign_created_on: date(2024, 10, 5),
            previous_bid: 1.12,
            new_bid: 1.25,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Pending,
        },
        AiDecision {
            id: "dec-004".to_string(),
            goal_name: "Defend brand share".to_string(),
            goal_level: "Brand".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva - SB - Brand Defense".to_string(),
            campaign_platform: "SB".to_string(),
            ad_group_name: "Brand keywords".to_string(),
            ad_group_platform: "SB".to_string(),
            target_type: "Keyword".to_string(),
            target_name: "eva steamer".to_string(),
            rule_code: "DB-101".to_string(),
            cost_type: "CPC".to_string(),
            decided_on: date(2024, 12, 16),
            campaign_created_on: date(2024, 3, 14),
            previous_bid: 3.40,
            new_bid: 3.06,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Applied,
        },
        AiDecision {
            id: "dec-005".to_string(),
            goal_name: "Recover lost shoppers".to_string(),
            goal_level: "Brand".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva - SD - Retargeting".to_string(),
            campaign_platform: "SD".to_string(),
            ad_group_name: "Purchase retarget".to_string(),
            ad_group_platform: "SD".to_string(),
            target_type: "Audience".to_string(),
            target_name: "views remarketing".to_string(),
            rule_code: "DB-110".to_string(),
            cost_type: "vCPM".to_string(),
            decided_on: date(2024, 12, 17),
            campaign_created_on: date(2024, 11, 1),
            previous_bid: 0.55,
            new_bid: 0.50,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Pending,
        },
        AiDecision {
            id: "dec-006".to_string(),
            goal_name: "Grow steamer sales".to_string(),
            goal_level: "Product".to_string(),
            optimization_name: "Daily Bidding".to_string(),
            optimization_period: "Daily".to_string(),
            campaign_name: "Eva - SP - AI - B0018XC8G6".to_string(),
            campaign_platform: "SP".to_string(),
            ad_group_name: "Auto group".to_string(),
            ad_group_platform: "SP".to_string(),
            target_type: "Product".to_string(),
            target_name: "travel steamer".to_string(),
            rule_code: "DB-103".to_string(),
            cost_type: "CPC".to_string(),
            decided_on: date(2024, 12, 17),
            campaign_created_on: date(2024, 9, 2),
            previous_bid: 0.72,
            new_bid: 0.86,
            change_amount: 0.0,
            change_ratio: 0.0,
            status: DecisionStatus::Applied,
        },
    ];
    for decision in &mut decisions {
        decision.change_amount = change_amount(decision.previous_bid, decision.new_bid);
        decision.change_ratio = change_ratio(decision.previous_bid, decision.new_bid);
    }
    decisions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
