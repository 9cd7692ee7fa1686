//! Domain entities. Pure data structures for the core business.
//!
//! No sheet/HTTP types here; adapters hand the core plain rows of strings.

use crate::domain::errors::SummaryError;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One record parsed from the baby-tracking sheet: a feeding, a diaper change, or both.
///
/// Immutable once built; construct through [`crate::domain::parser::parse`] or [`Event::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    occurred_at: NaiveDateTime,
    diaper_kind: String,
    feed_amount: Option<f64>,
    participants: Vec<String>,
}

impl Event {
    pub fn new(
        occurred_at: NaiveDateTime,
        diaper_kind: impl Into<String>,
        feed_amount: Option<f64>,
        participants: Vec<String>,
    ) -> Self {
        Self {
            occurred_at,
            diaper_kind: diaper_kind.into(),
            feed_amount,
            participants,
        }
    }

    pub fn occurred_at(&self) -> NaiveDateTime {
        self.occurred_at
    }

    /// Diaper label as entered in the form, e.g. "Poop", "Pee" or empty.
    pub fn diaper_kind(&self) -> &str {
        &self.diaper_kind
    }

    /// Formula amount in mL. `None` for diaper-only rows.
    pub fn feed_amount(&self) -> Option<f64> {
        self.feed_amount
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_feeding(&self) -> bool {
        self.feed_amount.is_some()
    }
}

/// Current state derived from the event log. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub most_recent_feed_time: NaiveDateTime,
    pub most_recent_feed_amount: Option<f64>,
    pub predicted_next_feed_time: NaiveDateTime,
    pub most_recent_dirty_diaper_time: NaiveDateTime,
}

/// Per-fact view of the same folds as [`StatusSnapshot`]; a fact the log cannot
/// supply is `None` and its cause is listed in `missing`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub most_recent_feed_time: Option<NaiveDateTime>,
    pub most_recent_feed_amount: Option<f64>,
    pub predicted_next_feed_time: Option<NaiveDateTime>,
    pub most_recent_dirty_diaper_time: Option<NaiveDateTime>,
    pub missing: Vec<SummaryError>,
}

impl StatusReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
