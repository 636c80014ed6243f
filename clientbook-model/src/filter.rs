use std::fmt;
use std::str::FromStr;

use crate::client::ClientType;
use crate::error::ModelError;

/// Client type selection applied ahead of sorting.
///
/// Held as transient UI state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientFilter {
    #[default]
    All,
    Individual,
    Company,
}

impl ClientFilter {
    /// The client type a record must have to pass, `None` for `All`.
    pub fn client_type(&self) -> Option<ClientType> {
        match self {
            ClientFilter::All => None,
            ClientFilter::Individual => Some(ClientType::Individual),
            ClientFilter::Company => Some(ClientType::Company),
        }
    }

    pub fn matches(&self, client_type: ClientType) -> bool {
        self.client_type()
            .is_none_or(|wanted| wanted == client_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientFilter::All => "All",
            ClientFilter::Individual => "Individual",
            ClientFilter::Company => "Company",
        }
    }
}

impl From<ClientType> for ClientFilter {
    fn from(value: ClientType) -> Self {
        match value {
            ClientType::Individual => ClientFilter::Individual,
            ClientType::Company => ClientFilter::Company,
        }
    }
}

impl fmt::Display for ClientFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ClientFilter::All);
        }
        s.parse::<ClientType>()
            .map(ClientFilter::from)
            .map_err(|_| ModelError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_type() {
        for client_type in ClientType::all() {
            assert!(ClientFilter::All.matches(*client_type));
        }
    }

    #[test]
    fn specific_filter_matches_only_its_type() {
        assert!(ClientFilter::Company.matches(ClientType::Company));
        assert!(!ClientFilter::Company.matches(ClientType::Individual));
        assert!(ClientFilter::Individual.matches(ClientType::Individual));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("company".parse(), Ok(ClientFilter::Company));
        assert_eq!(" ALL ".parse(), Ok(ClientFilter::All));
        assert_eq!(
            "vendor".parse::<ClientFilter>(),
            Err(ModelError::UnknownFilter("vendor".to_string()))
        );
    }
}
