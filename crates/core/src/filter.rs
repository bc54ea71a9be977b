//! Substring filtering for the decision log.
//!
//! The console filters decisions with a single free-text term matched
//! case-insensitively against several display fields at once. Filtering is
//! purely in-memory; the store is never consulted.

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// True when `term` matches at least one of `fields`.
///
/// Matching is a case-insensitive substring test. An empty or
/// whitespace-only term matches every record, which lets callers treat
/// "no filter" and "blank filter box" identically.
pub fn matches_term(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim();
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
