//! Client type filtering applied ahead of sorting.

use std::borrow::Borrow;

use clientbook_model::{ClientFilter, Record};

/// Keep the records whose client type passes `filter`.
///
/// `ClientFilter::All` passes everything. Surviving records keep their
/// relative order, so a stable sort afterwards still sees input order for
/// ties.
pub fn filter_records<T, I>(records: I, filter: ClientFilter) -> Vec<T>
where
    T: Borrow<Record>,
    I: IntoIterator<Item = T>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record.borrow().client_type))
        .collect()
}
