//! Plain-text rendering of client views and sort criteria.

use std::fmt::Write as _;

use clientbook_core::ClientView;
use clientbook_core::query::{field_value, parse_timestamp};
use clientbook_model::{FieldKind, Record, SortCriteriaList, SortField};

/// Table columns, left to right.
const COLUMNS: [SortField; 7] = [
    SortField::Id,
    SortField::Name,
    SortField::ClientType,
    SortField::Email,
    SortField::CreatedAt,
    SortField::UpdatedAt,
    SortField::Status,
];

pub const EMPTY_MESSAGE: &str = "No clients match the current criteria.";
pub const INVALID_DATE: &str = "Invalid Date";

const COLUMN_GAP: &str = "  ";

/// `Jan 15, 2023`, or [`INVALID_DATE`] when the value does not parse.
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|instant| instant.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn cell(record: &Record, field: SortField) -> String {
    let value = field_value(record, field);
    match field.kind() {
        FieldKind::Date => format_date(value),
        FieldKind::Text => value.to_string(),
    }
}

/// Render the client table for one view.
pub fn render_view(view: &ClientView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Clients: {} | Filter: {} | Sort ({})",
        view.records.len(),
        view.filter,
        view.active_criteria_count
    );

    let rows: Vec<Vec<String>> = view
        .records
        .iter()
        .map(|record| COLUMNS.iter().map(|field| cell(record, *field)).collect())
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, field)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(field.label().chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header: Vec<&str> = COLUMNS.iter().map(|field| field.label()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);

    if rows.is_empty() {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Render the criteria list, highest priority first.
pub fn render_criteria(criteria: &SortCriteriaList) -> String {
    let mut out = String::new();
    if criteria.is_empty() {
        let _ = writeln!(out, "No sort criteria. Clients are shown in source order.");
        return out;
    }

    let _ = writeln!(out, "Sort ({})", criteria.len());
    for (position, criterion) in criteria.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} | {} [{}]",
            position + 1,
            criterion.field.label(),
            criterion.direction.label_for(criterion.field),
            criterion.id
        );
    }
    out
}

/// Render the sortable fields with their wire names.
pub fn render_fields(fields: &[SortField]) -> String {
    let width = fields
        .iter()
        .map(|field| field.id().len())
        .max()
        .unwrap_or_default();
    fields
        .iter()
        .map(|field| format!("{:<width$}  {}\n", field.id(), field.label()))
        .collect()
}
