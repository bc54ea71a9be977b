//! Store-wide bidding settings model and update DTO.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// The merchant's global bidding defaults, stored as one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiddingSettings {
    /// Target ACoS in percent.
    pub target_acos: f64,
    /// Bid used when no rule supplies one, in currency units.
    pub default_bid: f64,
    /// Lower bound the automation may bid, in currency units.
    pub min_bid: f64,
    /// Upper bound the automation may bid, in currency units.
    pub max_bid: f64,
}

impl Default for BiddingSettings {
    fn default() -> Self {
        Self {
            target_acos: 30.0,
            default_bid: 0.75,
            min_bid: 0.02,
            max_bid: 5.0,
        }
    }
}

impl BiddingSettings {
    /// Merge a patch into these settings. Absent fields keep their value.
    pub fn apply(&mut self, update: &UpdateSettings) {
        if let Some(target_acos) = update.target_acos {
            self.target_acos = target_acos;
        }
        if let Some(default_bid) = update.default_bid {
            self.default_bid = default_bid;
        }
        if let Some(min_bid) = update.min_bid {
            self.min_bid = min_bid;
        }
        if let Some(max_bid) = update.max_bid {
            self.max_bid = max_bid;
        }
    }
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// DTO for patching the bidding settings. All fields optional; per-field
/// ranges are enforced here, cross-field window consistency in
/// `eva_core::settings`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[validate(range(min = 1.0, max = 100.0, message = "Target ACoS must be between 1 and 100 percent"))]
    pub target_acos: Option<f64>,
    #[validate(range(min = 0.02, max = 1000.0, message = "Default bid must be between 0.02 and 1000"))]
    pub default_bid: Option<f64>,
    #[validate(range(min = 0.02, max = 1000.0, message = "Minimum bid must be between 0.02 and 1000"))]
    pub min_bid: Option<f64>,
    #[validate(range(min = 0.02, max = 1000.0, message = "Maximum bid must be between 0.02 and 1000"))]
    pub max_bid: Option<f64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use eva_core::settings::{validate_bid, validate_bid_window, validate_target_acos};

    #[test]
    fn defaults_satisfy_their_own_validation() {
        let defaults = BiddingSettings::default();
        assert!(validate_target_acos(defaults.target_acos).is_ok());
        assert!(validate_bid("default_bid", defaults.default_bid).is_ok());
        assert!(validate_bid("min_bid", defaults.min_bid).is_ok());
        assert!(validate_bid("max_bid", defaults.max_bid).is_ok());
        assert!(validate_bid_window(defaults.min_bid, defaults.default_bid, defaults.max_bid).is_ok());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut settings = BiddingSettings::default();
        let before = settings.clone();

        settings.apply(&UpdateSettings {
            target_acos: Some(25.0),
            ..Default::default()
        });

        assert_eq!(settings.target_acos, 25.0);
        assert_eq!(settings.default_bid, before.default_bid);
        assert_eq!(settings.min_bid, before.min_bid);
        assert_eq!(settings.max_bid, before.max_bid);
    }

    #[test]
    fn update_dto_rejects_out_of_range_fields() {
        let update = UpdateSettings {
            target_acos: Some(150.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateSettings {
            min_bid: Some(0.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateSettings::default().validate().is_ok());
    }

    #[test]
    fn persisted_shape_uses_camel_case() {
        let json = serde_json::to_value(BiddingSettings::default()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("targetAcos"));
        assert!(object.contains_key("defaultBid"));
        assert!(object.contains_key("minBid"));
        assert!(object.contains_key("maxBid"));
    }
}
