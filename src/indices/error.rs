//! Error types for the indexed store

use super::cancel::CancelCause;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("invalid indices file: line {line} ({content:?}): {source}")]
    InvalidFormat {
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("error reading indices source: {0}")]
    SourceRead(#[from] std::io::Error),

    #[error("index not found for value {value}")]
    NotFound { value: i64 },

    #[error("search canceled: {0}")]
    Canceled(#[from] CancelCause),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl IndexError {
    /// Stable error code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::InvalidFormat { .. } => "INVALID_FORMAT",
            IndexError::SourceRead(_) => "SOURCE_READ_ERROR",
            IndexError::NotFound { .. } => "NOT_FOUND",
            IndexError::Canceled(_) => "CANCELED",
            IndexError::Unknown(_) => "UNKNOWN",
        }
    }
}
