//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// A single row could not be turned into an [`crate::domain::Event`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("row has {len} cells, expected at least {expected}")]
    MissingField { len: usize, expected: usize },

    #[error("malformed timestamp {value:?} (expected MM/DD/YYYY HH:MM:SS)")]
    MalformedTimestamp { value: String },
}

/// Parse failure tagged with the 1-based sheet row it came from (header is row 1).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("sheet row {row}: {source}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: ParseError,
}

/// The event log does not contain a fact the status page needs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryError {
    #[error("no feeding event found")]
    NoFeedingEventFound,

    #[error("no dirty diaper found")]
    NoDirtyDiaperFound,

    #[error("predicted feed time is out of range")]
    FeedTimeOutOfRange,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Row source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Parse(#[from] RowError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}
