//! Core domain layer. No external I/O dependencies.
//!
//! Row parsing and status folding live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod parser;
pub mod summarizer;

pub use entities::{Event, StatusReport, StatusSnapshot};
pub use errors::{DomainError, ParseError, RowError, SummaryError};
pub use parser::{parse, parse_rows};
pub use summarizer::{DEFAULT_FEED_INTERVAL, SOILED_MARKER, summarize, summarize_report};
