//! The AI decision table: filter, paginate, select, revert.
//!
//! The table owns the full decision log in memory. Filtering and pagination
//! are view state over that log; the selection is a global id set that
//! survives page and filter changes. The only mutation is revert, which
//! flips a decision's status to its terminal state and writes the log back.

use std::collections::HashSet;
use std::sync::Arc;

use eva_core::decision::DecisionStatus;
use eva_core::error::CoreError;
use eva_core::filter::matches_term;
use eva_core::paging::{clamp_page, page_slice, total_pages};
use eva_store::keys;
use eva_store::models::decision::AiDecision;
use eva_store::seed;
use eva_store::{KeyValueStore, KeyValueStoreExt};

use crate::notify::Notifier;

/// Decision-table page size before any configuration is applied.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Owner of the decision log and its table view state.
pub struct DecisionTable {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    decisions: Vec<AiDecision>,
    filter: String,
    page: usize,
    page_size: usize,
    selection: HashSet<String>,
}

impl DecisionTable {
    /// Load the decision log from the store, falling back to the sample log
    /// a demo environment starts from.
    pub fn load(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let decisions: Vec<AiDecision> =
            store.get_or(keys::DECISION_LOG, seed::sample_decisions());
        Self {
            store,
            notifier,
            decisions,
            filter: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selection: HashSet::new(),
        }
    }

    // -- View state ---------------------------------------------------------

    /// The active free-text filter term.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total records in the log, ignoring the filter.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    /// True when the log is empty.
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Decisions passing the active filter, in log order.
    pub fn filtered(&self) -> Vec<&AiDecision> {
        self.decisions
            .iter()
            .filter(|d| matches_term(&self.filter, &d.filter_fields()))
            .collect()
    }

    /// Number of pages the filtered set spans.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// The records visible on the current page.
    pub fn current_page(&self) -> Vec<&AiDecision> {
        page_slice(&self.filtered(), self.page, self.page_size).to_vec()
    }

    /// Set the filter term. The view returns to page 1 so the first match
    /// is visible rather than a stale page index past the shrunken set.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
        self.page = 1;
    }

    /// Change the page size (minimum 1). The view returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Jump to `page`, clamped into the valid range for the filtered set.
    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.filtered().len(), self.page_size);
    }

    // -- Selection ----------------------------------------------------------

    /// Ids currently selected, across all pages.
    pub fn selection(&self) -> &HashSet<String> {
        &self.selection
    }

    /// True when the decision with `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Flip the selection state of one decision id.
    pub fn toggle_one(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Select-all semantics for the current page: when every record on the
    /// page is already selected, deselect exactly those; otherwise select
    /// every record on the page. Ids on other pages are never touched.
    pub fn toggle_page(&mut self) {
        let page_ids: Vec<String> = self
            .current_page()
            .iter()
            .map(|d| d.id.clone())
            .collect();
        if page_ids.is_empty() {
            return;
        }

        let all_selected = page_ids.iter().all(|id| self.selection.contains(id));
        if all_selected {
            for id in &page_ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(page_ids);
        }
    }

    // -- Revert -------------------------------------------------------------

    /// Revert one decision. Reverting an already-reverted decision is a
    /// successful no-change: nothing is written and nothing is announced.
    pub fn revert(&mut self, id: &str) -> Result<(), CoreError> {
        let decision = self
            .decisions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "decision",
                id: id.to_string(),
            })?;

        if decision.status.is_terminal() {
            return Ok(());
        }
        decision.status = decision.status.reverted();

        self.persist();
        tracing::info!(id, "Decision reverted");
        self.notifier.success("Decision reverted");
        Ok(())
    }

    /// Revert every selected decision and clear the selection. Returns the
    /// selection size at invocation, which is also what the notification
    /// reports. An empty selection is a silent no-op returning 0.
    pub fn revert_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let selected = std::mem::take(&mut self.selection);
        let count = selected.len();
        for decision in &mut self.decisions {
            if selected.contains(&decision.id) && !decision.status.is_terminal() {
                decision.status = decision.status.reverted();
            }
        }

        self.persist();
        tracing::info!(count, "Decisions reverted in bulk");
        if count == 1 {
            self.notifier.success("1 decision reverted");
        } else {
            self.notifier.success(&format!("{count} decisions reverted"));
        }
        count
    }

    /// The status of the decision with `id`, if it exists.
    pub fn status_of(&self, id: &str) -> Option<DecisionStatus> {
        self.decisions.iter().find(|d| d.id == id).map(|d| d.status)
    }

    // Write-through is best effort: the in-memory log is already correct,
    // and the next revert rewrites the same key in full.
    fn persist(&self) {
        if let Err(error) = self.store.put(keys::DECISION_LOG, &self.decisions) {
            tracing::warn!(%error, "failed to persist decision log");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
