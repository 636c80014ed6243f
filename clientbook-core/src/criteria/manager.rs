use std::sync::Arc;

use clientbook_model::{
    CriterionId, SortCriteriaList, SortCriterion, SortDirection, SortField,
};
use tracing::debug;

use crate::error::{CriteriaError, Result};
use crate::persistence::CriteriaStore;

/// Owner of the active sort criteria list.
///
/// Every edit goes through this type. An edit updates the in-memory list
/// first, then hands the new list to the injected [`CriteriaStore`]; the
/// returned list is what later reads observe whether or not the save
/// succeeded. Edits that leave the list unchanged are not persisted.
#[derive(Debug)]
pub struct SortCriteriaManager {
    criteria: SortCriteriaList,
    available_fields: &'static [SortField],
    store: Arc<dyn CriteriaStore>,
}

impl SortCriteriaManager {
    /// Start a session from whatever the store has persisted.
    pub fn load(store: Arc<dyn CriteriaStore>) -> Self {
        let criteria = store.load();
        Self::with_criteria(store, criteria)
    }

    /// Start from an explicit list without reading the store.
    pub fn with_criteria(
        store: Arc<dyn CriteriaStore>,
        criteria: SortCriteriaList,
    ) -> Self {
        Self {
            criteria,
            available_fields: SortField::all(),
            store,
        }
    }

    /// Read-only view of the current list.
    pub fn criteria(&self) -> &SortCriteriaList {
        &self.criteria
    }

    /// Owned copy of the current list, for readers that outlive a borrow.
    pub fn snapshot(&self) -> SortCriteriaList {
        self.criteria.clone()
    }

    pub fn available_fields(&self) -> &'static [SortField] {
        self.available_fields
    }

    pub fn active_count(&self) -> usize {
        self.criteria.len()
    }

    /// Whether [`add`](Self::add) would append a criterion.
    pub fn can_add(&self) -> bool {
        self.criteria.len() < self.available_fields.len()
    }

    /// Field a new criterion would get: the first available field not yet
    /// used, or `name` once every field is taken.
    pub fn next_field(&self) -> SortField {
        self.available_fields
            .iter()
            .copied()
            .find(|field| !self.criteria.contains_field(*field))
            .unwrap_or(SortField::Name)
    }

    /// Append an ascending criterion on [`next_field`](Self::next_field).
    ///
    /// Does nothing once the list holds as many criteria as there are
    /// sortable fields.
    pub fn add(&mut self) -> &SortCriteriaList {
        if !self.can_add() {
            debug!(count = self.criteria.len(), "sort criteria list is full, ignoring add");
            return &self.criteria;
        }

        let criterion =
            SortCriterion::new(self.next_field(), SortDirection::Ascending);
        let mut entries = self.criteria.to_vec();
        entries.push(criterion);
        self.commit(entries.into(), "add")
    }

    /// Remove the criterion with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &CriterionId) -> &SortCriteriaList {
        let entries: Vec<_> = self
            .criteria
            .iter()
            .filter(|criterion| &criterion.id != id)
            .cloned()
            .collect();
        self.commit(entries.into(), "remove")
    }

    /// Move the criterion at `from` to position `to`, shifting the ones in
    /// between. This changes sort priority.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<&SortCriteriaList> {
        let len = self.criteria.len();
        if from >= len || to >= len {
            return Err(CriteriaError::IndexOutOfBounds { from, to, len });
        }

        let mut entries = self.criteria.to_vec();
        let moved = entries.remove(from);
        entries.insert(to, moved);
        Ok(self.commit(entries.into(), "reorder"))
    }

    /// Drag-end form of [`reorder`](Self::reorder): move the `active`
    /// criterion to where `over` currently sits.
    pub fn move_criterion(
        &mut self,
        active: &CriterionId,
        over: &CriterionId,
    ) -> Result<&SortCriteriaList> {
        let from = self.position_of(active)?;
        let to = self.position_of(over)?;
        self.reorder(from, to)
    }

    /// Change the field of the criterion with `id`, keeping its position and
    /// direction.
    ///
    /// Unlike [`add`](Self::add) this does not check whether another
    /// criterion already sorts on `field`.
    pub fn set_field(&mut self, id: &CriterionId, field: SortField) -> &SortCriteriaList {
        let entries = self.map_matching(id, |criterion| criterion.field = field);
        self.commit(entries.into(), "set_field")
    }

    /// Change the direction of the criterion with `id`.
    pub fn set_direction(
        &mut self,
        id: &CriterionId,
        direction: SortDirection,
    ) -> &SortCriteriaList {
        let entries =
            self.map_matching(id, |criterion| criterion.direction = direction);
        self.commit(entries.into(), "set_direction")
    }

    /// Replace the whole list with the default criterion.
    pub fn clear_to_default(&mut self) -> &SortCriteriaList {
        self.commit(SortCriteriaList::default_list(), "clear")
    }

    fn position_of(&self, id: &CriterionId) -> Result<usize> {
        self.criteria
            .position(id)
            .ok_or_else(|| CriteriaError::CriterionNotFound(id.clone()))
    }

    fn map_matching(
        &self,
        id: &CriterionId,
        update: impl FnMut(&mut SortCriterion),
    ) -> Vec<SortCriterion> {
        let mut entries = self.criteria.to_vec();
        entries
            .iter_mut()
            .filter(|criterion| &criterion.id == id)
            .for_each(update);
        entries
    }

    fn commit(
        &mut self,
        next: SortCriteriaList,
        action: &'static str,
    ) -> &SortCriteriaList {
        if next == self.criteria {
            debug!(action, "sort criteria unchanged");
            return &self.criteria;
        }

        self.criteria = next;
        debug!(action, count = self.criteria.len(), "sort criteria updated");
        self.store.save(&self.criteria);
        &self.criteria
    }
}
