//! Error types for IPCA history and adjustment operations.

use thiserror::Error;

/// A specialized Result type for IPCA operations.
pub type IpcaResult<T> = Result<T, IpcaError>;

/// The error type for repository construction and adjustment calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpcaError {
    /// Month outside the 1..=12 range.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// Start of a calculation window falls after its end.
    #[error("Invalid window: {start} is after {end}")]
    InvalidWindow {
        /// Window start, formatted as MM/YYYY.
        start: String,
        /// Window end, formatted as MM/YYYY.
        end: String,
    },

    /// Record identifiers must be positive.
    #[error("Invalid record id: {id} (ids start at 1)")]
    InvalidId {
        /// The rejected identifier.
        id: u32,
    },

    /// Two records share an identifier.
    #[error("Duplicate record id: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },

    /// Records are not strictly ascending by period.
    #[error("Records out of order: {previous} followed by {current}")]
    UnorderedRecords {
        /// Period of the earlier record, formatted as MM/YYYY.
        previous: String,
        /// Period of the offending record, formatted as MM/YYYY.
        current: String,
    },

    /// Compounding exceeded the representable decimal range.
    #[error("Arithmetic overflow while compounding {periods} periods")]
    Overflow {
        /// Number of periods applied before the overflow.
        periods: usize,
    },

    /// Dataset could not be read or parsed.
    #[error("Dataset error: {reason}")]
    Dataset {
        /// Description of the failure.
        reason: String,
    },
}

impl IpcaError {
    /// Creates a dataset error.
    pub fn dataset(reason: impl Into<String>) -> Self {
        Self::Dataset {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for IpcaError {
    fn from(err: std::io::Error) -> Self {
        Self::dataset(err.to_string())
    }
}

impl From<serde_json::Error> for IpcaError {
    fn from(err: serde_json::Error) -> Self {
        Self::dataset(err.to_string())
    }
}
