//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Tabular event log (the baby-tracking sheet).
#[async_trait::async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch every row as a list of cell strings, header row first.
    ///
    /// Rows are returned as stored; short rows are not padded.
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, DomainError>;
}
