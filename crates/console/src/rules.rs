//! Ordered rule lists per optimization section.
//!
//! Each section owns an ordered list of [`OptimizationRule`]s evaluated by
//! rank. Structural mutations (append, move, remove) renumber ranks to the
//! contiguous sequence `1..=len` before returning, write the new list
//! through to the store, and notify the user. Range violations fail without
//! touching state; boundary moves are quiet no-ops.

use std::collections::HashMap;
use std::sync::Arc;

use eva_core::error::CoreError;
use eva_core::rules::{validate_description, validate_title};
use eva_core::section::{OptimizationSection, ALL_SECTIONS};
use eva_core::types::RuleId;
use eva_store::keys;
use eva_store::models::rule::{CreateRule, OptimizationRule};
use eva_store::seed;
use eva_store::{KeyValueStore, KeyValueStoreExt};

use crate::notify::Notifier;

/// Owner of every section's ordered rule list.
pub struct RuleListManager {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    lists: HashMap<OptimizationSection, Vec<OptimizationRule>>,
}

impl RuleListManager {
    /// Load every section's list from the store, seeding sections that have
    /// never been written.
    pub fn load(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let mut lists = HashMap::new();
        for section in ALL_SECTIONS {
            let rules: Vec<OptimizationRule> =
                store.get_or(keys::rules_key(section), seed::default_rules(section));
            lists.insert(section, rules);
        }
        Self {
            store,
            notifier,
            lists,
        }
    }

    /// The rules of `section` in display order.
    pub fn rules(&self, section: OptimizationSection) -> &[OptimizationRule] {
        self.lists.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rules in `section`.
    pub fn len(&self, section: OptimizationSection) -> usize {
        self.rules(section).len()
    }

    /// True when `section` has no rules.
    pub fn is_empty(&self, section: OptimizationSection) -> bool {
        self.rules(section).is_empty()
    }

    /// Append a new rule at the end of `section` and return its identity.
    pub fn append(
        &mut self,
        section: OptimizationSection,
        create: CreateRule,
    ) -> Result<RuleId, CoreError> {
        validate_title(&create.title)?;
        validate_description("action", &create.action_description)?;
        validate_description("condition", &create.condition_description)?;

        let list = self.lists.entry(section).or_default();
        let rule = OptimizationRule::from_create(list.len() as u32 + 1, create);
        let id = rule.id;
        let title = rule.title.clone();
        list.push(rule);
        renumber(list);

        self.persist(section);
        tracing::info!(
            section = section.as_str(),
            %id,
            title = %title,
            "Optimization rule created"
        );
        self.notifier.success("Optimization created");
        Ok(id)
    }

    /// Swap the rule at `index` with its predecessor. Returns `Ok(false)`
    /// without side effects when the rule is already first.
    pub fn move_up(
        &mut self,
        section: OptimizationSection,
        index: usize,
    ) -> Result<bool, CoreError> {
        self.check_index(section, index)?;
        if index == 0 {
            return Ok(false);
        }

        let list = self.lists.entry(section).or_default();
        list.swap(index, index - 1);
        renumber(list);

        self.persist(section);
        tracing::info!(
            section = section.as_str(),
            from = index,
            to = index - 1,
            "Optimization rule moved"
        );
        self.notifier.success("Optimization priority updated");
        Ok(true)
    }

    /// Swap the rule at `index` with its successor. Returns `Ok(false)`
    /// without side effects when the rule is already last.
    pub fn move_down(
        &mut self,
        section: OptimizationSection,
        index: usize,
    ) -> Result<bool, CoreError> {
        self.check_index(section, index)?;
        if index == self.len(section) - 1 {
            return Ok(false);
        }

        let list = self.lists.entry(section).or_default();
        list.swap(index, index + 1);
        renumber(list);

        self.persist(section);
        tracing::info!(
            section = section.as_str(),
            from = index,
            to = index + 1,
            "Optimization rule moved"
        );
        self.notifier.success("Optimization priority updated");
        Ok(true)
    }

    /// Remove and return the rule at `index`, closing the rank gap.
    pub fn remove(
        &mut self,
        section: OptimizationSection,
        index: usize,
    ) -> Result<OptimizationRule, CoreError> {
        self.check_index(section, index)?;

        let list = self.lists.entry(section).or_default();
        let removed = list.remove(index);
        renumber(list);

        self.persist(section);
        tracing::info!(
            section = section.as_str(),
            id = %removed.id,
            title = %removed.title,
            "Optimization rule deleted"
        );
        self.notifier.success("Optimization deleted");
        Ok(removed)
    }

    fn check_index(&self, section: OptimizationSection, index: usize) -> Result<(), CoreError> {
        let len = self.len(section);
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    // Write-through is best effort: the in-memory list is already correct,
    // and the next mutation rewrites the same key in full.
    fn persist(&self, section: OptimizationSection) {
        let Some(rules) = self.lists.get(&section) else {
            return;
        };
        if let Err(error) = self.store.put(keys::rules_key(section), rules) {
            tracing::warn!(
                section = section.as_str(),
                %error,
                "failed to persist rule list"
            );
        }
    }
}

/// Reassign ranks to the contiguous sequence `1..=len` in display order.
fn renumber(rules: &mut [OptimizationRule]) {
    for (position, rule) in rules.iter_mut().enumerate() {
        rule.rank = position as u32 + 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use assert_matches::assert_matches;
    use eva_core::rules::validate_rank_sequence;
    use eva_store::MemoryStore;

    fn manager() -> (RuleListManager, Arc<RecordingNotifier>) {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let manager = RuleListManager::load(store, notifier.clone());
        (manager, notifier)
    }

    fn create(title: &str) -> CreateRule {
        CreateRule {
            title: title.to_string(),
            action_description: String::new(),
            condition_description: String::new(),
        }
    }

    fn ranks(manager: &RuleListManager, section: OptimizationSection) -> Vec<u32> {
        manager.rules(section).iter().map(|r| r.rank).collect()
    }

    const SECTION: OptimizationSection = OptimizationSection::DailyBidding;

    #[test]
    fn fresh_manager_starts_from_the_seed() {
        let (manager, _) = manager();
        for section in ALL_SECTIONS {
            assert!(!manager.is_empty(section));
            assert!(validate_rank_sequence(&ranks(&manager, section)).is_ok());
        }
    }

    #[test]
    fn append_assigns_the_next_rank() {
        let (mut manager, notifier) = manager();
        let before = manager.len(SECTION);

        manager.append(SECTION, create("Pause low performers")).unwrap();

        assert_eq!(manager.len(SECTION), before + 1);
        let last = manager.rules(SECTION).last().unwrap();
        assert_eq!(last.rank, before as u32 + 1);
        assert_eq!(last.title, "Pause low performers");
        assert_eq!(notifier.take(), vec!["Optimization created"]);
    }

    #[test]
    fn append_rejects_a_blank_title() {
        let (mut manager, notifier) = manager();
        let before = manager.len(SECTION);

        assert_matches!(
            manager.append(SECTION, create("   ")),
            Err(CoreError::Validation(_))
        );
        assert_eq!(manager.len(SECTION), before);
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn append_renumbers_a_list_loaded_with_gapped_ranks() {
        let store = Arc::new(MemoryStore::new());

        // A document left by another writer: ranks are neither contiguous
        // nor 1-based.
        let mut stored = seed::default_rules(SECTION);
        stored.truncate(2);
        stored[0].rank = 3;
        stored[1].rank = 7;
        store.put(keys::rules_key(SECTION), &stored).unwrap();

        let mut manager =
            RuleListManager::load(store, Arc::new(RecordingNotifier::new()));
        manager.append(SECTION, create("Fresh rule")).unwrap();

        assert_eq!(ranks(&manager, SECTION), vec![1, 2, 3]);
        let titles: Vec<&str> = manager
            .rules(SECTION)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles[0], stored[0].title);
        assert_eq!(titles[1], stored[1].title);
        assert_eq!(titles[2], "Fresh rule");
    }

    #[test]
    fn move_up_swaps_with_the_predecessor() {
        let (mut manager, notifier) = manager();
        let titles: Vec<String> = manager
            .rules(SECTION)
            .iter()
            .map(|r| r.title.clone())
            .collect();

        assert!(manager.move_up(SECTION, 1).unwrap());

        let after: Vec<String> = manager
            .rules(SECTION)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(after[0], titles[1]);
        assert_eq!(after[1], titles[0]);
        assert!(validate_rank_sequence(&ranks(&manager, SECTION)).is_ok());
        assert_eq!(notifier.take(), vec!["Optimization priority updated"]);
    }

    #[test]
    fn move_up_at_the_top_is_a_quiet_no_op() {
        let (mut manager, notifier) = manager();
        let before: Vec<_> = manager.rules(SECTION).to_vec();

        assert!(!manager.move_up(SECTION, 0).unwrap());

        assert_eq!(manager.rules(SECTION), &before[..]);
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn move_down_at_the_bottom_is_a_quiet_no_op() {
        let (mut manager, notifier) = manager();
        let last = manager.len(SECTION) - 1;
        let before: Vec<_> = manager.rules(SECTION).to_vec();

        assert!(!manager.move_down(SECTION, last).unwrap());

        assert_eq!(manager.rules(SECTION), &before[..]);
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn out_of_range_index_fails_without_side_effects() {
        let (mut manager, notifier) = manager();
        let len = manager.len(SECTION);
        let before: Vec<_> = manager.rules(SECTION).to_vec();

        assert_matches!(
            manager.move_up(SECTION, len),
            Err(CoreError::IndexOutOfRange { index, len: l }) if index == len && l == len
        );
        assert_matches!(
            manager.move_down(SECTION, len + 5),
            Err(CoreError::IndexOutOfRange { .. })
        );
        assert_matches!(
            manager.remove(SECTION, len),
            Err(CoreError::IndexOutOfRange { .. })
        );

        assert_eq!(manager.rules(SECTION), &before[..]);
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn remove_renumbers_and_preserves_relative_order() {
        let (mut manager, notifier) = manager();
        let titles: Vec<String> = manager
            .rules(SECTION)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert!(titles.len() >= 3, "seed must hold at least three rules");

        let removed = manager.remove(SECTION, 1).unwrap();

        assert_eq!(removed.title, titles[1]);
        let after: Vec<String> = manager
            .rules(SECTION)
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(after[0], titles[0]);
        assert_eq!(after[1], titles[2]);
        assert!(validate_rank_sequence(&ranks(&manager, SECTION)).is_ok());
        assert_eq!(notifier.take(), vec!["Optimization deleted"]);
    }

    #[test]
    fn ranks_stay_contiguous_across_a_mixed_sequence() {
        let (mut manager, _) = manager();

        manager.append(SECTION, create("A")).unwrap();
        manager.append(SECTION, create("B")).unwrap();
        manager.move_up(SECTION, 2).unwrap();
        manager.move_down(SECTION, 0).unwrap();
        manager.remove(SECTION, 1).unwrap();
        manager.move_up(SECTION, 1).unwrap();

        assert!(validate_rank_sequence(&ranks(&manager, SECTION)).is_ok());
    }

    #[test]
    fn rule_identity_survives_reordering() {
        let (mut manager, _) = manager();
        let id = manager.append(SECTION, create("Track me")).unwrap();
        let last = manager.len(SECTION) - 1;

        manager.move_up(SECTION, last).unwrap();

        let moved = manager
            .rules(SECTION)
            .iter()
            .find(|r| r.id == id)
            .expect("rule should still exist");
        assert_eq!(moved.title, "Track me");
        assert_ne!(moved.rank, last as u32 + 1, "rank should have changed");
    }

    #[test]
    fn sections_do_not_share_rules() {
        let (mut manager, _) = manager();
        let negating_before = manager.rules(OptimizationSection::Negating).to_vec();

        manager.append(SECTION, create("Only daily bidding")).unwrap();

        assert_eq!(
            manager.rules(OptimizationSection::Negating),
            &negating_before[..]
        );
    }

    #[test]
    fn mutations_write_through_to_the_store() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let mut manager = RuleListManager::load(store.clone(), notifier.clone());
        let id = manager.append(SECTION, create("Persisted rule")).unwrap();

        // A fresh manager over the same store sees the mutation.
        let reloaded = RuleListManager::load(store, Arc::new(RecordingNotifier::new()));
        assert!(reloaded.rules(SECTION).iter().any(|r| r.id == id));
    }
}
