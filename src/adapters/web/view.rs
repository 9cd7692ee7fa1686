//! Display model for the status page.
//!
//! Turns raw snapshot timestamps into strings like "3:45 PM (Tue)".

use crate::domain::{StatusReport, SummaryError};
use chrono::NaiveDateTime;
use serde::Serialize;

const PRETTY_TIME_FORMAT: &str = "%-I:%M %p (%a)";

pub fn to_pretty_time(dt: NaiveDateTime) -> String {
    dt.format(PRETTY_TIME_FORMAT).to_string()
}

/// Formula amount without a trailing ".0" for whole numbers.
pub fn format_amount(ml: f64) -> String {
    if ml.fract() == 0.0 {
        format!("{:.0}", ml)
    } else {
        format!("{}", ml)
    }
}

/// Template context. Facts the log cannot supply render as blank fields.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatusView {
    pub most_recent_feed: String,
    pub most_recent_feed_amount: String,
    pub next_feed: String,
    pub most_recent_dirty_diaper: String,
    pub notice: Option<String>,
}

impl From<&StatusReport> for StatusView {
    fn from(r: &StatusReport) -> Self {
        let notice = (!r.missing.is_empty()).then(|| {
            r.missing
                .iter()
                .map(|e| notice_for(*e))
                .collect::<Vec<_>>()
                .join(" ")
        });
        Self {
            most_recent_feed: r.most_recent_feed_time.map(to_pretty_time).unwrap_or_default(),
            most_recent_feed_amount: r
                .most_recent_feed_amount
                .map(format_amount)
                .unwrap_or_default(),
            next_feed: r.predicted_next_feed_time.map(to_pretty_time).unwrap_or_default(),
            most_recent_dirty_diaper: r
                .most_recent_dirty_diaper_time
                .map(to_pretty_time)
                .unwrap_or_default(),
            notice,
        }
    }
}

fn notice_for(err: SummaryError) -> &'static str {
    match err {
        SummaryError::NoFeedingEventFound => "No feedings recorded yet.",
        SummaryError::NoDirtyDiaperFound => "No dirty diapers recorded yet.",
        SummaryError::FeedTimeOutOfRange => "Next feed time is out of range; check the feed interval.",
    }
}
