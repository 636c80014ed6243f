//! Sort key types for comparing client records
//!
//! Keys are extracted once per record and field, then compared with plain
//! `Ord`. Each key type encodes the natural (ascending) order of its field;
//! the criterion direction is applied on top by the comparator.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clientbook_model::{FieldKind, Record, SortField};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-insensitive, accent-aware text key.
///
/// The primary level is the lowercase text with diacritics stripped, so
/// "é" sorts next to "e" instead of after "z". Letters without a canonical
/// decomposition ("ø", "ł", "æ", ...) are folded onto their base letters at
/// this level too. The secondary level keeps the (decomposed, lowercase)
/// original to order "e" before "é". Values that differ only by letter case
/// compare equal.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct TextKey {
    primary: String,
    secondary: String,
}

impl TextKey {
    pub fn new(value: &str) -> Self {
        let secondary: String = value.nfd().flat_map(char::to_lowercase).collect();
        let mut primary = String::with_capacity(secondary.len());
        for c in secondary.chars().filter(|c| !is_combining_mark(*c)) {
            match fold_base_letter(c) {
                Some(folded) => primary.push_str(folded),
                None => primary.push(c),
            }
        }
        TextKey { primary, secondary }
    }
}

/// Base-letter spelling of lowercase Latin letters that NFD leaves intact.
fn fold_base_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŀ' => "l",
        'ŧ' => "t",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

/// Timestamp key.
///
/// A value that does not parse is `None`, which orders strictly before every
/// valid instant. Two unparseable values tie.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct InstantKey(Option<DateTime<Utc>>);

impl InstantKey {
    pub fn new(value: &str) -> Self {
        InstantKey(parse_timestamp(value))
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Sort key for one field of one record.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum FieldKey {
    Text(TextKey),
    Instant(InstantKey),
}

impl FieldKey {
    /// Extract the key for `field` from `record`.
    pub fn extract(record: &Record, field: SortField) -> Self {
        let raw = field_value(record, field);
        match field.kind() {
            FieldKind::Date => FieldKey::Instant(InstantKey::new(raw)),
            FieldKind::Text => FieldKey::Text(TextKey::new(raw)),
        }
    }
}

/// Raw textual value of a sortable field.
pub fn field_value(record: &Record, field: SortField) -> &str {
    match field {
        SortField::Name => &record.name,
        SortField::ClientType => record.client_type.as_str(),
        SortField::Email => &record.email,
        SortField::CreatedAt => &record.created_at,
        SortField::UpdatedAt => &record.updated_at,
        SortField::Status => record.status.as_str(),
        SortField::Id => &record.id,
    }
}

/// Offset forms RFC 3339 does not cover (no seconds, or `+hhmm`).
const OFFSET_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z", "%Y-%m-%dT%H:%M:%S%.f%z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_naive(value: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|naive| naive.and_utc())
    })
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339, date-times with or without seconds and with an offset,
/// `Z` or no zone (read as UTC), and a bare date (UTC midnight).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(utc) = value.strip_suffix('Z') {
        return parse_naive(utc);
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    if let Some(parsed) = parse_naive(value) {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
