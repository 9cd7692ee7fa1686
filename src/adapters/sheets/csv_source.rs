//! CSV row source. Implements RowSource over a CSV export URL or a local file.
//!
//! A sheet shared by link can be read without credentials from
//! `https://docs.google.com/spreadsheets/d/{id}/export?format=csv`.

use crate::domain::DomainError;
use crate::ports::RowSource;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum CsvLocation {
    Url(String),
    File(PathBuf),
}

pub struct CsvSource {
    client: Client,
    location: CsvLocation,
}

impl CsvSource {
    pub fn new(location: CsvLocation, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, location })
    }

    /// Export URL for a spreadsheet ID, optionally pinned to one tab (`gid`).
    pub fn export_url(sheet_id: &str, gid: Option<&str>) -> String {
        match gid {
            Some(gid) => format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
                sheet_id, gid
            ),
            None => format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
                sheet_id
            ),
        }
    }

    async fn read_body(&self) -> Result<Vec<u8>, DomainError> {
        match &self.location {
            CsvLocation::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| DomainError::Source(format!("read {}: {}", path.display(), e))),
            CsvLocation::Url(url) => {
                debug!(url = %url, "fetching CSV export");
                let res = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| DomainError::Source(format!("Request failed: {}", e)))?;
                if !res.status().is_success() {
                    return Err(DomainError::Source(format!(
                        "CSV export error {}",
                        res.status()
                    )));
                }
                let bytes = res
                    .bytes()
                    .await
                    .map_err(|e| DomainError::Source(format!("read body: {}", e)))?;
                Ok(bytes.to_vec())
            }
        }
    }
}

#[async_trait::async_trait]
impl RowSource for CsvSource {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, DomainError> {
        let body = self.read_body().await?;
        let rows = rows_from_csv(&body)
            .map_err(|e| DomainError::Source(format!("invalid CSV: {}", e)))?;
        info!(rows = rows.len(), "fetched CSV rows");
        Ok(rows)
    }
}

/// Read every record, header included, without interpreting it.
pub fn rows_from_csv(data: &[u8]) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    rdr.records()
        .map(|record| record.map(|r| r.iter().map(String::from).collect()))
        .collect()
}
