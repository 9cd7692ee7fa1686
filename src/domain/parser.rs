//! Row → Event parsing.
//!
//! A row is one sheet line as a list of cells:
//! - Timestamp, e.g. "10/15/2022 14:31:02"
//! - Diaper: "Poop", "Pee", a combination, or empty
//! - Formula amount in mL (empty when the row is diaper-only)
//! - Person(s): a single name or a ", "-separated list
//!
//! Every cell is trimmed before it is interpreted.

use crate::domain::entities::Event;
use crate::domain::errors::{ParseError, RowError};
use chrono::NaiveDateTime;

/// `strftime` layout of the form's timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Cells a row must carry: timestamp, diaper, amount, people.
pub const REQUIRED_FIELDS: usize = 4;

const PARTICIPANT_DELIMITER: &str = ", ";

/// Parse one row into an [`Event`].
///
/// Fails only on a short row or an unparseable timestamp. An amount that is
/// not a finite, non-negative number is treated as "no feeding".
pub fn parse<S: AsRef<str>>(row: &[S]) -> Result<Event, ParseError> {
    if row.len() < REQUIRED_FIELDS {
        return Err(ParseError::MissingField {
            len: row.len(),
            expected: REQUIRED_FIELDS,
        });
    }

    let raw_ts = row[0].as_ref().trim();
    let occurred_at = NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|_| {
        ParseError::MalformedTimestamp {
            value: raw_ts.to_string(),
        }
    })?;

    Ok(Event::new(
        occurred_at,
        row[1].as_ref().trim(),
        parse_amount(row[2].as_ref()),
        parse_participants(row[3].as_ref()),
    ))
}

/// Parse every data row of a sheet. The first row is the header and is skipped.
pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<Event>, RowError> {
    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(i, row)| parse(row).map_err(|source| RowError { row: i + 1, source }))
        .collect()
}

fn parse_amount(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_participants(cell: &str) -> Vec<String> {
    cell.split(PARTICIPANT_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
