//! Shared type aliases used across the console crates.

/// Optimization rules carry a stable identity assigned at creation,
/// independent of their display rank.
pub type RuleId = uuid::Uuid;
