pub mod clients;
pub mod debtors;
pub mod offers;
pub mod rates;

use std::fmt;

/// Error raised while reading or writing one of the tabular collaborators.
#[derive(Debug)]
pub enum TableError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownSex { value: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "failed to access table file: {}", err),
            TableError::Csv(err) => write!(f, "invalid tabular data: {}", err),
            TableError::Json(err) => write!(f, "could not encode offers as JSON: {}", err),
            TableError::UnknownSex { value } => {
                write!(f, "rate table row has unrecognized sex value '{}'", value)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            TableError::Csv(err) => Some(err),
            TableError::Json(err) => Some(err),
            TableError::UnknownSex { .. } => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
