//! Status service. Fetch the sheet, parse rows, fold into a snapshot.
//!
//! Nothing is cached: every call reads the source again.

use crate::domain::{
    DomainError, Event, StatusReport, StatusSnapshot, parse_rows, summarize, summarize_report,
};
use crate::ports::{RowSource, StatusPort};
use chrono::TimeDelta;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StatusService {
    source: Arc<dyn RowSource>,
    feed_interval: TimeDelta,
}

impl StatusService {
    /// # Arguments
    /// * `source` - Row source adapter (Sheets API, CSV, in-memory)
    /// * `feed_interval` - Added to the last feed time to predict the next one
    pub fn new(source: Arc<dyn RowSource>, feed_interval: TimeDelta) -> Self {
        Self {
            source,
            feed_interval,
        }
    }

    async fn load_events(&self) -> Result<Vec<Event>, DomainError> {
        let rows = self.source.fetch_rows().await?;
        let events = parse_rows(&rows).inspect_err(|e| {
            warn!(row = e.row, error = %e.source, "failed to parse sheet row");
        })?;
        info!(rows = rows.len(), events = events.len(), "parsed event log");
        Ok(events)
    }
}

#[async_trait::async_trait]
impl StatusPort for StatusService {
    async fn current_status(&self) -> Result<StatusSnapshot, DomainError> {
        let events = self.load_events().await?;
        let snapshot = summarize(&events, self.feed_interval).inspect_err(|e| {
            warn!(events = events.len(), error = %e, "event log incomplete");
        })?;
        Ok(snapshot)
    }

    async fn status_report(&self) -> Result<StatusReport, DomainError> {
        let events = self.load_events().await?;
        let report = summarize_report(&events, self.feed_interval);
        if !report.is_complete() {
            warn!(events = events.len(), missing = ?report.missing, "event log incomplete");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sheets::MemorySource;
    use crate::domain::{ParseError, SummaryError};
    use chrono::NaiveDate;

    const HEADER: [&str; 4] = ["Timestamp", "Diaper", "Formula (mL)", "Person"];

    fn service(rows: &[[&str; 4]]) -> StatusService {
        let mut all = vec![HEADER];
        all.extend_from_slice(rows);
        StatusService::new(
            Arc::new(MemorySource::from_rows(&all)),
            crate::domain::DEFAULT_FEED_INTERVAL,
        )
    }

    #[tokio::test]
    async fn test_current_status() {
        let svc = service(&[
            ["10/15/2022 09:00:00", "", "90", "Alice"],
            ["10/15/2022 12:00:00", "Poop", "", "Bob"],
            ["10/15/2022 13:00:00", "Pee", "120", "Alice, Bob"],
        ]);
        let snapshot = svc.current_status().await.unwrap();
        let day = NaiveDate::from_ymd_opt(2022, 10, 15).unwrap();
        assert_eq!(
            snapshot.most_recent_feed_time,
            day.and_hms_opt(13, 0, 0).unwrap()
        );
        assert_eq!(snapshot.most_recent_feed_amount, Some(120.0));
        assert_eq!(
            snapshot.predicted_next_feed_time,
            day.and_hms_opt(16, 0, 0).unwrap()
        );
        assert_eq!(
            snapshot.most_recent_dirty_diaper_time,
            day.and_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_current_status_propagates_parse_error() {
        let svc = service(&[
            ["10/15/2022 09:00:00", "", "90", "Alice"],
            ["not-a-date", "Pee", "3", "Alice"],
        ]);
        match svc.current_status().await {
            Err(DomainError::Parse(e)) => {
                assert_eq!(e.row, 3);
                assert!(matches!(e.source, ParseError::MalformedTimestamp { .. }));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_report_keeps_known_facts() {
        let svc = service(&[["10/15/2022 13:00:00", "Pee", "120", "Alice"]]);
        let report = svc.status_report().await.unwrap();
        let day = NaiveDate::from_ymd_opt(2022, 10, 15).unwrap();
        assert_eq!(report.most_recent_feed_time, day.and_hms_opt(13, 0, 0));
        assert_eq!(report.predicted_next_feed_time, day.and_hms_opt(16, 0, 0));
        assert_eq!(report.most_recent_dirty_diaper_time, None);
        assert_eq!(report.missing, [SummaryError::NoDirtyDiaperFound]);
    }

    #[tokio::test]
    async fn test_current_status_header_only() {
        let svc = service(&[]);
        assert!(matches!(
            svc.current_status().await,
            Err(DomainError::Summary(SummaryError::NoFeedingEventFound))
        ));
    }
}
