//! Onboarding choices: management mode and campaign-scope selection.
//!
//! During first-run setup the merchant picks how Eva manages campaigns and
//! which campaign scopes it may touch. Both choices are persisted; this
//! module holds the closed mode enum and the scope-id validation used
//! before anything is written.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Management mode
// ---------------------------------------------------------------------------

/// How the automation applies its decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementMode {
    /// Decisions are applied without review. The product default.
    #[default]
    Automated,
    /// Decisions wait for explicit merchant approval.
    Manual,
}

impl ManagementMode {
    /// Parse a mode string as stored in the key-value store.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "automated" => Ok(Self::Automated),
            "manual" => Ok(Self::Manual),
            _ => Err(CoreError::Validation(format!(
                "Invalid management mode '{s}'. Must be one of: automated, manual"
            ))),
        }
    }

    /// Convert to the store-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automated => "automated",
            Self::Manual => "manual",
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automated => "Automated",
            Self::Manual => "Manual",
        }
    }
}

// ---------------------------------------------------------------------------
// Scope selection
// ---------------------------------------------------------------------------

/// Validate that every selected scope id exists in the known catalog.
/// `known` is the full catalog id list; order does not matter.
pub fn validate_scope_selection(selected: &[String], known: &[&str]) -> Result<(), CoreError> {
    for id in selected {
        if !known.contains(&id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown campaign scope '{id}'. Must be one of: {}",
                known.join(", ")
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ManagementMode ------------------------------------------------------

    #[test]
    fn mode_from_str_valid() {
        assert_eq!(
            ManagementMode::from_str_db("automated").unwrap(),
            ManagementMode::Automated
        );
        assert_eq!(
            ManagementMode::from_str_db("manual").unwrap(),
            ManagementMode::Manual
        );
    }

    #[test]
    fn mode_from_str_invalid() {
        assert!(ManagementMode::from_str_db("auto").is_err());
        assert!(ManagementMode::from_str_db("").is_err());
        assert!(ManagementMode::from_str_db("Manual").is_err());
    }

    #[test]
    fn mode_as_str_roundtrip() {
        for mode in [ManagementMode::Automated, ManagementMode::Manual] {
            assert_eq!(ManagementMode::from_str_db(mode.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn mode_defaults_to_automated() {
        assert_eq!(ManagementMode::default(), ManagementMode::Automated);
    }

    #[test]
    fn mode_labels_are_nonempty() {
        assert!(!ManagementMode::Automated.label().is_empty());
        assert!(!ManagementMode::Manual.label().is_empty());
    }

    // -- validate_scope_selection --------------------------------------------

    #[test]
    fn known_scopes_pass() {
        let known = ["sponsored-products", "sponsored-brands"];
        let selected = vec!["sponsored-products".to_string()];
        assert!(validate_scope_selection(&selected, &known).is_ok());
    }

    #[test]
    fn empty_selection_passes() {
        assert!(validate_scope_selection(&[], &["sponsored-products"]).is_ok());
    }

    #[test]
    fn unknown_scope_fails_and_is_named() {
        let known = ["sponsored-products"];
        let selected = vec!["sponsored-display".to_string()];
        let err = validate_scope_selection(&selected, &known).unwrap_err();
        assert!(
            err.to_string().contains("sponsored-display"),
            "error should name the unknown id: {err}"
        );
    }
}
