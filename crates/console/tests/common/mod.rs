//! Shared helpers for console integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use eva_core::decision::{change_amount, change_ratio, DecisionStatus};
use eva_console::notify::RecordingNotifier;
use eva_store::models::decision::AiDecision;
use eva_store::{KeyValueStoreExt, MemoryStore};

static TRACING: Once = Once::new();

/// Install the test log subscriber once per binary. `RUST_LOG` overrides
/// the default `info` filter.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A decision fixture with consistent delta fields and plausible metadata.
pub fn decision(
    id: &str,
    campaign_name: &str,
    ad_group_name: &str,
    target_name: &str,
    previous_bid: f64,
    new_bid: f64,
    status: DecisionStatus,
) -> AiDecision {
    AiDecision {
        id: id.to_string(),
        goal_name: "Grow steamer sales".to_string(),
        goal_level: "Product".to_string(),
        optimization_name: "Daily Bidding".to_string(),
        optimization_period: "Daily".to_string(),
        campaign_name: campaign_name.to_string(),
        campaign_platform: "SP".to_string(),
        ad_group_name: ad_group_name.to_string(),
        ad_group_platform: "SP".to_string(),
        target_type: "Keyword".to_string(),
        target_name: target_name.to_string(),
        rule_code: "DB-104".to_string(),
        cost_type: "CPC".to_string(),
        decided_on: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        campaign_created_on: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        previous_bid,
        new_bid,
        change_amount: change_amount(previous_bid, new_bid),
        change_ratio: change_ratio(previous_bid, new_bid),
        status,
    }
}

/// The five-record log most decision-table tests start from: two campaigns
/// the filter fixtures search for, three statuses, one bid decrease with
/// known deltas.
pub fn five_decision_log() -> Vec<AiDecision> {
    vec![
        decision(
            "dec-101",
            "Eva - SP - AI - B0018XC8G6",
            "Exact match",
            "garment steamer",
            2.38,
            2.14,
            DecisionStatus::Applied,
        ),
        decision(
            "dec-102",
            "Eva | Standing Garment Steamer",
            "Broad match",
            "steamer for clothes",
            0.86,
            0.99,
            DecisionStatus::Applied,
        ),
        decision(
            "dec-103",
            "Eva - SP - AI - B0018XC8G6",
            "Auto group",
            "travel steamer",
            0.72,
            0.86,
            DecisionStatus::Pending,
        ),
        decision(
            "dec-104",
            "Eva - SB - Brand Defense",
            "Brand keywords",
            "eva steamer",
            3.40,
            3.06,
            DecisionStatus::Applied,
        ),
        decision(
            "dec-105",
            "Eva - SD - Retargeting",
            "Purchase retarget",
            "views remarketing",
            0.55,
            0.50,
            DecisionStatus::Pending,
        ),
    ]
}

/// A memory store pre-populated with the five-record decision log.
pub fn store_with_decisions() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put(eva_store::keys::DECISION_LOG, &five_decision_log())
        .expect("seeding the memory store should succeed");
    store
}

/// A fresh recording notifier behind an `Arc`.
pub fn recorder() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::new())
}
