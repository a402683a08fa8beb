//! Error types for input validation and scenario I/O

use thiserror::Error;

/// Errors raised while validating inputs or loading/writing scenarios
#[derive(Debug, Error)]
pub enum NpvError {
    /// An input is outside the domain the projection is defined on
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// A scenario row failed validation (row numbers are 1-based, header excluded)
    #[error("scenario row {row}: {source}")]
    InvalidScenario {
        row: usize,
        #[source]
        source: Box<NpvError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NpvError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NpvError>;
