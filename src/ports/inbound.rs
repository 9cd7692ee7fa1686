//! Inbound port. Presentation (adapter) calls into the application.

use crate::domain::{DomainError, StatusReport, StatusSnapshot};

/// Status query: the web front end asks for a fresh snapshot on every request.
#[async_trait::async_trait]
pub trait StatusPort: Send + Sync {
    /// Fetch the event log and fold it into the current status.
    /// Fails if any fact is missing.
    async fn current_status(&self) -> Result<StatusSnapshot, DomainError>;

    /// Fetch the event log and fold each fact independently.
    /// Only fetch and parse failures are errors; missing facts are reported in the result.
    async fn status_report(&self) -> Result<StatusReport, DomainError>;
}
