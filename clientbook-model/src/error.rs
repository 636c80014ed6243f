use std::fmt::{self, Display};

/// Errors produced when parsing model values from their textual forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownField(String),
    UnknownDirection(String),
    UnknownClientType(String),
    UnknownStatus(String),
    UnknownFilter(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownField(value) => {
                write!(f, "unknown sort field: {value}")
            }
            ModelError::UnknownDirection(value) => {
                write!(f, "unknown sort direction: {value}")
            }
            ModelError::UnknownClientType(value) => {
                write!(f, "unknown client type: {value}")
            }
            ModelError::UnknownStatus(value) => {
                write!(f, "unknown client status: {value}")
            }
            ModelError::UnknownFilter(value) => {
                write!(f, "unknown client filter: {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
