//! Folds an event log into a [`StatusSnapshot`].
//!
//! "Most recent" is decided by timestamp, not by row position; rows that share a
//! timestamp resolve to the later row. For an already chronological log this is
//! the same as taking the last matching row.

use crate::domain::entities::{Event, StatusReport, StatusSnapshot};
use crate::domain::errors::SummaryError;
use chrono::{NaiveDateTime, TimeDelta};

/// Diaper label token that marks a bowel movement. Case-sensitive.
pub const SOILED_MARKER: &str = "Poop";

/// Time between feeds used to predict the next one.
pub const DEFAULT_FEED_INTERVAL: TimeDelta = TimeDelta::hours(3);

pub fn summarize(
    events: &[Event],
    feed_interval: TimeDelta,
) -> Result<StatusSnapshot, SummaryError> {
    let feed = most_recent_feed(events)?;
    let most_recent_feed_time = feed.occurred_at();
    Ok(StatusSnapshot {
        most_recent_feed_time,
        most_recent_feed_amount: feed.feed_amount(),
        predicted_next_feed_time: add_interval(most_recent_feed_time, feed_interval)?,
        most_recent_dirty_diaper_time: most_recent_dirty_diaper(events)?,
    })
}

/// Like [`summarize`], but every fact is computed on its own so one gap does not
/// hide the others.
pub fn summarize_report(events: &[Event], feed_interval: TimeDelta) -> StatusReport {
    let mut report = StatusReport::default();
    match most_recent_feed(events) {
        Ok(feed) => {
            report.most_recent_feed_time = Some(feed.occurred_at());
            report.most_recent_feed_amount = feed.feed_amount();
        }
        Err(e) => report.missing.push(e),
    }
    // A missing feed is already recorded above.
    match next_feed_time(events, feed_interval) {
        Ok(t) => report.predicted_next_feed_time = Some(t),
        Err(SummaryError::NoFeedingEventFound) => {}
        Err(e) => report.missing.push(e),
    }
    match most_recent_dirty_diaper(events) {
        Ok(t) => report.most_recent_dirty_diaper_time = Some(t),
        Err(e) => report.missing.push(e),
    }
    report
}

/// Latest event that carries a formula amount.
pub fn most_recent_feed(events: &[Event]) -> Result<&Event, SummaryError> {
    last_matching(events, Event::is_feeding).ok_or(SummaryError::NoFeedingEventFound)
}

/// Time of the latest soiled diaper.
pub fn most_recent_dirty_diaper(events: &[Event]) -> Result<NaiveDateTime, SummaryError> {
    last_matching(events, is_soiled)
        .map(Event::occurred_at)
        .ok_or(SummaryError::NoDirtyDiaperFound)
}

/// Most recent feed time plus `feed_interval`.
pub fn next_feed_time(
    events: &[Event],
    feed_interval: TimeDelta,
) -> Result<NaiveDateTime, SummaryError> {
    add_interval(most_recent_feed(events)?.occurred_at(), feed_interval)
}

fn add_interval(t: NaiveDateTime, interval: TimeDelta) -> Result<NaiveDateTime, SummaryError> {
    t.checked_add_signed(interval)
        .ok_or(SummaryError::FeedTimeOutOfRange)
}

fn is_soiled(event: &Event) -> bool {
    event.diaper_kind().contains(SOILED_MARKER)
}

/// Among matching events, the one with the greatest timestamp; later position wins ties.
fn last_matching(events: &[Event], pred: impl Fn(&Event) -> bool) -> Option<&Event> {
    events
        .iter()
        .filter(|e| pred(*e))
        .fold(None, |best: Option<&Event>, e| match best {
            Some(b) if b.occurred_at() > e.occurred_at() => Some(b),
            _ => Some(e),
        })
}
