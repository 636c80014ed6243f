use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Kind of client a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientType {
    Individual,
    Company,
}

impl ClientType {
    pub fn all() -> &'static [ClientType] {
        &[ClientType::Individual, ClientType::Company]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Individual => "Individual",
            ClientType::Company => "Company",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(ClientType::Individual),
            "company" => Ok(ClientType::Company),
            _ => Err(ModelError::UnknownClientType(s.to_string())),
        }
    }
}

/// Lifecycle status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            "pending" => Ok(ClientStatus::Pending),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// A single client row.
///
/// `created_at` and `updated_at` hold the timestamps exactly as received
/// (ISO-8601 text). They are parsed only when compared, so a malformed value
/// is carried through instead of rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Record {
    pub id: String,
    pub name: String,
    pub client_type: ClientType,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: ClientStatus,
}
