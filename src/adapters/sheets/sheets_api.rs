//! Google Sheets values API adapter. Implements RowSource.
//!
//! Reads `GET /v4/spreadsheets/{id}/values/{range}` with either an API key
//! (sheet shared as "anyone with the link") or an OAuth bearer token.

use crate::domain::DomainError;
use crate::ports::RowSource;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// How requests are authorized against the Sheets API.
#[derive(Debug, Clone)]
pub enum SheetsAuth {
    ApiKey(String),
    BearerToken(String),
}

/// Response body of `spreadsheets.values.get`. `values` is omitted for an empty range.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

pub struct SheetsApiSource {
    client: Client,
    base_url: String,
    sheet_id: String,
    range: String,
    auth: SheetsAuth,
}

impl SheetsApiSource {
    /// Create a new Sheets API source.
    ///
    /// # Arguments
    /// * `sheet_id` - Spreadsheet ID from the sheet URL
    /// * `range` - A1 range or tab name, e.g. "Form Responses 1"
    /// * `auth` - API key or bearer token
    /// * `timeout` - Per-request timeout
    pub fn new(
        sheet_id: String,
        range: String,
        auth: SheetsAuth,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: SHEETS_API_BASE.to_string(),
            sheet_id,
            range,
            auth,
        })
    }

    /// Point the adapter at a different API root (e.g. a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn values_url(&self) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::Config(format!("invalid Sheets API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DomainError::Config("Sheets API URL cannot be a base".into()))?
            .pop_if_empty()
            .push(&self.sheet_id)
            .push("values")
            .push(&self.range);
        url.query_pairs_mut()
            .append_pair("majorDimension", "ROWS")
            .append_pair("valueRenderOption", "FORMATTED_VALUE");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RowSource for SheetsApiSource {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, DomainError> {
        let mut url = self.values_url()?;
        debug!(url = %url, "fetching sheet values");

        let request = match &self.auth {
            SheetsAuth::ApiKey(key) => {
                url.query_pairs_mut().append_pair("key", key);
                self.client.get(url)
            }
            SheetsAuth::BearerToken(token) => self.client.get(url).bearer_auth(token),
        };

        let res = request
            .send()
            .await
            .map_err(|e| DomainError::Source(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Source(format!(
                "Sheets API error {}: {}",
                status, text
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| DomainError::Source(format!("read body: {}", e)))?;
        let rows = rows_from_value_range(&body)?;
        info!(sheet = %self.sheet_id, rows = rows.len(), "fetched sheet rows");
        Ok(rows)
    }
}

/// Decode a `ValueRange` JSON body into rows of strings.
///
/// The API omits trailing empty cells, so every row is padded with empty
/// strings to the width of the widest row, giving a full grid.
fn rows_from_value_range(body: &str) -> Result<Vec<Vec<String>>, DomainError> {
    let range: ValueRange = serde_json::from_str(body)
        .map_err(|e| DomainError::Source(format!("invalid Sheets API response: {}", e)))?;
    let width = range.values.iter().map(Vec::len).max().unwrap_or(0);
    Ok(range
        .values
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> = row.into_iter().map(cell_to_string).collect();
            cells.resize(width, String::new());
            cells
        })
        .collect())
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SheetsApiSource {
        SheetsApiSource::new(
            "abc123".into(),
            "Form Responses 1".into(),
            SheetsAuth::ApiKey("k".into()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_rows_from_value_range() {
        let body = r#"{
            "range": "'Form Responses 1'!A1:D3",
            "majorDimension": "ROWS",
            "values": [
                ["Timestamp", "Diaper", "Formula (mL)", "Person"],
                ["10/15/2022 09:00:00", "", "90", "Alice"],
                ["10/15/2022 12:00:00", "Poop"]
            ]
        }"#;
        let rows = rows_from_value_range(body).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], ["10/15/2022 09:00:00", "", "90", "Alice"]);
        assert_eq!(rows[2], ["10/15/2022 12:00:00", "Poop", "", ""]);
    }

    #[test]
    fn test_trimmed_diaper_row_parses() {
        let body = r#"{"values": [
            ["Timestamp", "Diaper", "Formula (mL)", "Person"],
            ["10/15/2022 09:00:00", "", "90", "Alice"],
            ["10/15/2022 12:00:00", "Poop"]
        ]}"#;
        let events = crate::domain::parse_rows(&rows_from_value_range(body).unwrap()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].diaper_kind(), "Poop");
        assert_eq!(events[1].feed_amount(), None);
        assert!(events[1].participants().is_empty());
    }

    #[test]
    fn test_rows_from_value_range_empty_sheet() {
        let rows = rows_from_value_range(r#"{"range": "Sheet1!A1:Z1000"}"#).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_non_string_cells_are_stringified() {
        let rows = rows_from_value_range(r#"{"values": [["x", 90, null, true]]}"#).unwrap();
        assert_eq!(rows[0], ["x", "90", "", "true"]);
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            rows_from_value_range("<html>"),
            Err(DomainError::Source(_))
        ));
    }

    #[test]
    fn test_values_url_encodes_range() {
        let url = source().values_url().unwrap();
        assert_eq!(url.host_str(), Some("sheets.googleapis.com"));
        assert!(
            url.path()
                .ends_with("/v4/spreadsheets/abc123/values/Form%20Responses%201")
        );
        assert!(url.query().unwrap().contains("majorDimension=ROWS"));
    }

    #[test]
    fn test_values_url_custom_base() {
        let url = source()
            .with_base_url("http://127.0.0.1:9000/v4/spreadsheets/")
            .values_url()
            .unwrap();
        assert_eq!(url.path(), "/v4/spreadsheets/abc123/values/Form%20Responses%201");
    }
}
