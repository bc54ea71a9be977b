//! Decision lifecycle and bid-delta arithmetic.
//!
//! A decision records one automated bid change. Its status starts as
//! `pending` or `applied` (assigned by the data source) and the console can
//! only move it to `reverted`. There is no transition out of `reverted` and
//! no path back to `applied`; re-reverting is accepted and changes nothing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of an AI bid decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Pending,
    Applied,
    Reverted,
}

impl DecisionStatus {
    /// Parse a status string as stored in the key-value store.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "applied" => Ok(Self::Applied),
            "reverted" => Ok(Self::Reverted),
            _ => Err(CoreError::Validation(format!(
                "Invalid decision status '{s}'. Must be one of: pending, applied, reverted"
            ))),
        }
    }

    /// Convert to the store-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Applied => "applied",
            Self::Reverted => "reverted",
        }
    }

    /// `reverted` is terminal: no transition leaves it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reverted)
    }

    /// The status after a revert. Every status maps to `Reverted`; calling
    /// this on an already-reverted decision is a harmless identity.
    pub fn reverted(self) -> Self {
        Self::Reverted
    }
}

// ---------------------------------------------------------------------------
// Bid-delta arithmetic
// ---------------------------------------------------------------------------

/// Round a currency or percentage value to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Absolute bid change in currency units, rounded to two decimals.
/// Negative means the bid was decreased.
pub fn change_amount(previous_bid: f64, new_bid: f64) -> f64 {
    round2(new_bid - previous_bid)
}

/// Relative bid change in percent, rounded to two decimals.
/// Negative means the bid was decreased. A zero previous bid would divide
/// by zero, so it is reported as `0.0`.
pub fn change_ratio(previous_bid: f64, new_bid: f64) -> f64 {
    if previous_bid == 0.0 {
        return 0.0;
    }
    round2((new_bid - previous_bid) / previous_bid * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
