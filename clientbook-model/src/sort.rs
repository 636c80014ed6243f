//! Sort criteria vocabulary: sortable fields, directions, and the ordered
//! criteria list edited by the user.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::ModelError;

/// How values of a field are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Case-insensitive, accent-aware text ordering.
    Text,
    /// Chronological ordering of parsed timestamps.
    Date,
}

/// Record fields available for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortField {
    Name,
    ClientType,
    Email,
    CreatedAt,
    UpdatedAt,
    Status,
    Id,
}

impl SortField {
    /// Every sortable field, in the order offered to the user.
    pub const ALL: [SortField; 7] = [
        SortField::Name,
        SortField::ClientType,
        SortField::Email,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Status,
        SortField::Id,
    ];

    pub fn all() -> &'static [SortField] {
        &Self::ALL
    }

    /// Wire identifier, matching the persisted `field` value.
    pub fn id(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::ClientType => "clientType",
            SortField::Email => "email",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Status => "status",
            SortField::Id => "id",
        }
    }

    /// Column heading shown for the field.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Client Name",
            SortField::ClientType => "Client Type",
            SortField::Email => "Email",
            SortField::CreatedAt => "Created At",
            SortField::UpdatedAt => "Updated At",
            SortField::Status => "Status",
            SortField::Id => "Client ID",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SortField::CreatedAt | SortField::UpdatedAt => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the wire form as well as snake/kebab spellings.
        let wanted: String =
            s.trim().chars().filter(|c| !matches!(c, '_' | '-')).collect();
        SortField::ALL
            .into_iter()
            .find(|field| field.id().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// Sort direction of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Apply this direction to a natural-order comparison.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Human-readable label for this direction on the given field.
    pub fn label_for(&self, field: SortField) -> &'static str {
        match (field.kind(), self) {
            (FieldKind::Date, SortDirection::Ascending) => "Oldest to Newest",
            (FieldKind::Date, SortDirection::Descending) => "Newest to Oldest",
            (FieldKind::Text, SortDirection::Ascending) => "A - Z",
            (FieldKind::Text, SortDirection::Descending) => "Z - A",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}

/// Opaque identifier of a criterion, unique within a criteria list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CriterionId(String);

impl CriterionId {
    /// Fresh identifier with the given prefix, e.g. `criterion-<uuid>`.
    pub fn generate(prefix: &str) -> Self {
        CriterionId(format!("{prefix}-{}", Uuid::now_v7()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for CriterionId {
    fn from(value: &str) -> Self {
        CriterionId(value.to_string())
    }
}

impl From<String> for CriterionId {
    fn from(value: String) -> Self {
        CriterionId(value)
    }
}

impl AsRef<str> for CriterionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `(field, direction)` sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortCriterion {
    pub id: CriterionId,
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            id: CriterionId::generate("criterion"),
            field,
            direction,
        }
    }

    /// The default criterion: newest clients first, with a fresh id.
    pub fn default_criterion() -> Self {
        Self {
            id: CriterionId::generate("default"),
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

/// Ordered list of criteria. Earlier entries take priority; later entries
/// only break ties left by the ones before them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SortCriteriaList(Vec<SortCriterion>);

impl SortCriteriaList {
    pub fn new(criteria: Vec<SortCriterion>) -> Self {
        Self(criteria)
    }

    /// The single-criterion fallback list (`createdAt`, descending).
    pub fn default_list() -> Self {
        Self(vec![SortCriterion::default_criterion()])
    }

    pub fn is_default(&self) -> bool {
        matches!(
            self.0.as_slice(),
            [SortCriterion {
                field: SortField::CreatedAt,
                direction: SortDirection::Descending,
                ..
            }]
        )
    }

    pub fn position(&self, id: &CriterionId) -> Option<usize> {
        self.0.iter().position(|criterion| &criterion.id == id)
    }

    pub fn get_by_id(&self, id: &CriterionId) -> Option<&SortCriterion> {
        self.0.iter().find(|criterion| &criterion.id == id)
    }

    pub fn contains_field(&self, field: SortField) -> bool {
        self.0.iter().any(|criterion| criterion.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = SortField> + '_ {
        self.0.iter().map(|criterion| criterion.field)
    }
}

impl Deref for SortCriteriaList {
    type Target = [SortCriterion];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<SortCriterion>> for SortCriteriaList {
    fn from(value: Vec<SortCriterion>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a SortCriteriaList {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
