//! In-memory row source for testing and demos without network access.

use crate::domain::DomainError;
use crate::ports::RowSource;

/// Fixed rows, header first. Every fetch returns a copy.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Vec<String>>,
}

impl MemorySource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_rows<S: AsRef<str>, R: AsRef<[S]>>(rows: &[R]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|c| c.as_ref().to_string()).collect())
                .collect(),
        )
    }
}

#[async_trait::async_trait]
impl RowSource for MemorySource {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, DomainError> {
        Ok(self.rows.clone())
    }
}
