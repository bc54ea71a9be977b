//! Validation for store-wide bidding settings.
//!
//! These are the merchant's global defaults: a target ACoS percentage and a
//! bid window (default, minimum, maximum) in marketplace currency. Bids are
//! bounded by the marketplace's own floor and ceiling; the window fields
//! must additionally be consistent with each other.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Lowest accepted target ACoS, in percent.
pub const MIN_TARGET_ACOS: f64 = 1.0;

/// Highest accepted target ACoS, in percent.
pub const MAX_TARGET_ACOS: f64 = 100.0;

/// Marketplace bid floor, in currency units.
pub const MIN_BID: f64 = 0.02;

/// Marketplace bid ceiling, in currency units.
pub const MAX_BID: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a target ACoS percentage: finite and within
/// [`MIN_TARGET_ACOS`]..=[`MAX_TARGET_ACOS`].
pub fn validate_target_acos(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(
            "Target ACoS must be a finite number".to_string(),
        ));
    }
    if !(MIN_TARGET_ACOS..=MAX_TARGET_ACOS).contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid target ACoS {value}. Must be between {MIN_TARGET_ACOS} and {MAX_TARGET_ACOS} percent"
        )));
    }
    Ok(())
}

/// Validate a single bid value: finite and within the marketplace's
/// [`MIN_BID`]..=[`MAX_BID`] window. `field` names the field in the error.
pub fn validate_bid(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "Bid field {field} must be a finite number"
        )));
    }
    if !(MIN_BID..=MAX_BID).contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field} {value}. Must be between {MIN_BID} and {MAX_BID}"
        )));
    }
    Ok(())
}

/// Validate the bid window as a whole: `min_bid <= default_bid <= max_bid`.
/// Individual fields are assumed already validated with [`validate_bid`].
pub fn validate_bid_window(min_bid: f64, default_bid: f64, max_bid: f64) -> Result<(), CoreError> {
    if min_bid > max_bid {
        return Err(CoreError::Validation(format!(
            "Minimum bid {min_bid} must not exceed maximum bid {max_bid}"
        )));
    }
    if default_bid < min_bid || default_bid > max_bid {
        return Err(CoreError::Validation(format!(
            "Default bid {default_bid} must lie between minimum bid {min_bid} and maximum bid {max_bid}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
