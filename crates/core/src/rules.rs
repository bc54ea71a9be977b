//! Validation for optimization rules.
//!
//! Rules are short operator-authored statements of what the automation may
//! do ("Lower bids on high-ACoS targets..."). Each rule in a section list
//! carries a 1-based `rank`; the list invariant is that ranks are exactly
//! `1..=len` in display order, with no gaps or duplicates.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum length of a rule title, in characters.
pub const MAX_TITLE_LEN: usize = 120;

/// Maximum length of a rule's action or condition description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a rule title: required, non-blank, at most [`MAX_TITLE_LEN`]
/// characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Rule title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Rule title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional descriptive field (action or condition). Blank is
/// allowed; only the length is capped. `field` names the field in the error.
pub fn validate_description(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Rule {field} must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Check the list invariant: ranks must be exactly `1..=len` in order.
pub fn validate_rank_sequence(ranks: &[u32]) -> Result<(), CoreError> {
    for (position, rank) in ranks.iter().enumerate() {
        let expected = (position + 1) as u32;
        if *rank != expected {
            return Err(CoreError::Validation(format!(
                "Rule ranks out of sequence: expected {expected} at position {position}, found {rank}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
