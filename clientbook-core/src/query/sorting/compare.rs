use std::borrow::Borrow;
use std::cmp::Ordering;

use clientbook_model::{Record, SortCriterion};

use super::keys::FieldKey;

/// Compare two records under an ordered criteria list.
///
/// The first criterion on which the records differ decides, with its
/// direction applied. Records that tie on every criterion (or an empty list)
/// compare `Equal`.
pub fn compare_records(
    a: &Record,
    b: &Record,
    criteria: &[SortCriterion],
) -> Ordering {
    criteria
        .iter()
        .map(|criterion| {
            let a_key = FieldKey::extract(a, criterion.field);
            let b_key = FieldKey::extract(b, criterion.field);
            criterion.direction.apply(a_key.cmp(&b_key))
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare two pre-extracted key rows, one key per criterion.
fn compare_key_rows(
    a: &[FieldKey],
    b: &[FieldKey],
    criteria: &[SortCriterion],
) -> Ordering {
    a.iter()
        .zip(b)
        .zip(criteria)
        .map(|((a_key, b_key), criterion)| {
            criterion.direction.apply(a_key.cmp(b_key))
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stably sort records under an ordered criteria list.
///
/// Returns a new sequence; records equal under every criterion keep their
/// input order. With no criteria the input order is returned as is.
///
/// Works over owned records and references alike.
pub fn sort_records<T, I>(records: I, criteria: &[SortCriterion]) -> Vec<T>
where
    T: Borrow<Record>,
    I: IntoIterator<Item = T>,
{
    if criteria.is_empty() {
        return records.into_iter().collect();
    }

    // Extract keys once per record; dates are parsed and text folded here
    // rather than on every comparison.
    let mut keyed: Vec<(Vec<FieldKey>, T)> = records
        .into_iter()
        .map(|record| {
            let keys = criteria
                .iter()
                .map(|criterion| {
                    FieldKey::extract(record.borrow(), criterion.field)
                })
                .collect();
            (keys, record)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_key_rows(a, b, criteria));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Check whether a record sequence is already ordered under `criteria`.
pub fn is_sorted_by_criteria<T: Borrow<Record>>(
    records: &[T],
    criteria: &[SortCriterion],
) -> bool {
    records.windows(2).all(|pair| {
        compare_records(pair[0].borrow(), pair[1].borrow(), criteria)
            .is_le()
    })
}
