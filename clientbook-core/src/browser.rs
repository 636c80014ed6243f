//! Browsing session: the record source, the criteria manager and the
//! current filter, combined into per-render views.

use std::sync::Arc;

use clientbook_model::{
    ClientFilter, CriterionId, Record, SortDirection, SortField,
};
use tracing::debug;

use crate::criteria::SortCriteriaManager;
use crate::error::Result;
use crate::persistence::CriteriaStore;
use crate::query::{filter_records, sort_records};
use crate::store::RecordSource;

/// One user action against the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    SetFilter(ClientFilter),
    AddCriterion,
    RemoveCriterion(CriterionId),
    Reorder { from: usize, to: usize },
    MoveCriterion { active: CriterionId, over: CriterionId },
    SetField { id: CriterionId, field: SortField },
    SetDirection { id: CriterionId, direction: SortDirection },
    ClearCriteria,
}

/// What a renderer receives for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientView<'a> {
    /// Filtered then sorted records.
    pub records: Vec<&'a Record>,
    /// Number of criteria driving the order, for the sort badge.
    pub active_criteria_count: usize,
    /// Filter that produced `records`.
    pub filter: ClientFilter,
}

/// Explicitly owned browsing state for one session.
#[derive(Debug)]
pub struct ClientBrowser<S> {
    source: S,
    criteria: SortCriteriaManager,
    filter: ClientFilter,
}

impl<S: RecordSource> ClientBrowser<S> {
    /// Open a session, loading persisted criteria from `store`.
    pub fn open(source: S, store: Arc<dyn CriteriaStore>) -> Self {
        Self::with_manager(source, SortCriteriaManager::load(store))
    }

    pub fn with_manager(source: S, criteria: SortCriteriaManager) -> Self {
        Self {
            source,
            criteria,
            filter: ClientFilter::All,
        }
    }

    pub fn criteria(&self) -> &SortCriteriaManager {
        &self.criteria
    }

    pub fn filter(&self) -> ClientFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ClientFilter) {
        if self.filter != filter {
            debug!(from = %self.filter, to = %filter, "client filter changed");
        }
        self.filter = filter;
    }

    /// Apply one user action.
    ///
    /// Only reorder and move actions can fail, and they leave the criteria
    /// untouched when they do.
    pub fn apply(&mut self, action: BrowserAction) -> Result<()> {
        match action {
            BrowserAction::SetFilter(filter) => self.set_filter(filter),
            BrowserAction::AddCriterion => {
                self.criteria.add();
            }
            BrowserAction::RemoveCriterion(id) => {
                self.criteria.remove(&id);
            }
            BrowserAction::Reorder { from, to } => {
                self.criteria.reorder(from, to)?;
            }
            BrowserAction::MoveCriterion { active, over } => {
                self.criteria.move_criterion(&active, &over)?;
            }
            BrowserAction::SetField { id, field } => {
                self.criteria.set_field(&id, field);
            }
            BrowserAction::SetDirection { id, direction } => {
                self.criteria.set_direction(&id, direction);
            }
            BrowserAction::ClearCriteria => {
                self.criteria.clear_to_default();
            }
        }
        Ok(())
    }

    /// Filter, then sort, the current records.
    pub fn view(&self) -> ClientView<'_> {
        let filtered = filter_records(self.source.list(), self.filter);
        let criteria = self.criteria.criteria();
        let records = sort_records(filtered, criteria);
        ClientView {
            records,
            active_criteria_count: criteria.len(),
            filter: self.filter,
        }
    }
}

#[cfg(all(test, feature = "demo"))]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStorage, SlotCriteriaStore};
    use crate::store::RecordStore;
    use clientbook_model::ClientType;

    fn demo_browser() -> (ClientBrowser<RecordStore>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(SlotCriteriaStore::new(storage.clone()));
        (ClientBrowser::open(RecordStore::demo(), store), storage)
    }

    fn view_ids<S: RecordSource>(browser: &ClientBrowser<S>) -> Vec<String> {
        browser.view().records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn default_view_is_newest_first() {
        let (browser, _) = demo_browser();

        let view = browser.view();

        assert_eq!(view.active_criteria_count, 1);
        assert_eq!(view.filter, ClientFilter::All);
        assert_eq!(
            view_ids(&browser),
            ["cli_5", "cli_3", "cli_1", "cli_2", "cli_6", "cli_4"]
        );
    }

    #[test]
    fn filter_then_sort() {
        let (mut browser, _) = demo_browser();

        browser.apply(BrowserAction::SetFilter(ClientFilter::Company)).unwrap();

        let view = browser.view();
        assert_eq!(view.records.len(), 3);
        assert!(
            view.records
                .iter()
                .all(|r| r.client_type == ClientType::Company)
        );
        assert_eq!(view_ids(&browser), ["cli_2", "cli_6", "cli_4"]);
    }

    #[test]
    fn actions_reach_the_manager_and_storage() {
        let (mut browser, storage) = demo_browser();
        let default_id = browser.criteria().criteria()[0].id.clone();

        browser
            .apply(BrowserAction::SetField {
                id: default_id.clone(),
                field: SortField::Name,
            })
            .unwrap();
        browser
            .apply(BrowserAction::SetDirection {
                id: default_id,
                direction: SortDirection::Ascending,
            })
            .unwrap();

        assert_eq!(
            view_ids(&browser),
            ["cli_1", "cli_2", "cli_3", "cli_4", "cli_5", "cli_6"]
        );
        assert!(
            storage
                .value(crate::persistence::CRITERIA_SLOT_KEY)
                .unwrap()
                .contains("\"field\":\"name\"")
        );
    }

    #[test]
    fn failed_reorder_surfaces_error_and_keeps_view() {
        let (mut browser, _) = demo_browser();
        let before = view_ids(&browser);

        let result = browser.apply(BrowserAction::Reorder { from: 0, to: 3 });

        assert!(result.is_err());
        assert_eq!(view_ids(&browser), before);
    }

    #[test]
    fn empty_criteria_shows_source_order() {
        let (mut browser, _) = demo_browser();
        let id = browser.criteria().criteria()[0].id.clone();

        browser.apply(BrowserAction::RemoveCriterion(id)).unwrap();

        assert_eq!(browser.view().active_criteria_count, 0);
        assert_eq!(
            view_ids(&browser),
            ["cli_1", "cli_2", "cli_3", "cli_4", "cli_5", "cli_6"]
        );
    }
}
