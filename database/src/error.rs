use std::fmt;

use thiserror::Error;

/// Field of a person that a request must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Number,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Number => write!(f, "number"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersonError {
    // Request validation
    #[error("{0} missing")]
    MissingField(Field),

    #[error("name must be unique")]
    DuplicateName,

    // Store
    #[error("malformatted id")]
    InvalidIdentifierFormat(String),

    #[error("{}", .0.join(", "))]
    ValidationFailure(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database took too long to respond to request")]
    DatabaseTimeout,

    #[error("Database is not running")]
    DatabaseUnavailable,
}

impl From<tokio_postgres::Error> for PersonError {
    fn from(err: tokio_postgres::Error) -> Self {
        PersonError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PersonError {
    fn from(err: serde_json::Error) -> Self {
        PersonError::Storage(err.to_string())
    }
}

pub type PersonResult<T> = Result<T, PersonError>;
