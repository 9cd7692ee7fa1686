//! Application configuration. Sheet location, credentials, server address.
//!
//! Loaded once at startup and handed to adapters; the domain never reads the environment.

use crate::adapters::sheets::{CsvLocation, CsvSource, SheetsAuth};
use crate::domain::{DEFAULT_FEED_INTERVAL, DomainError};
use chrono::TimeDelta;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default range when none is configured. A1 notation without a tab name reads the
/// first visible tab, whatever it is called (form-fed sheets name it "Form Responses 1").
pub const DEFAULT_SHEET_RANGE: &str = "A:Z";

/// Upper bound for `feed_interval_hours` (one week).
pub const MAX_FEED_INTERVAL_HOURS: f64 = 168.0;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Spreadsheet ID (from the sheet URL). Read from BABY_UPDATE_SHEET_ID or GOOGLE_SHEET_ID.
    #[serde(default)]
    pub sheet_id: Option<String>,

    /// Tab name or A1 range, e.g. "Form Responses 1". Defaults to the first tab.
    #[serde(default)]
    pub sheet_range: Option<String>,

    /// Tab `gid` for the CSV export used when no Sheets API credentials are set.
    #[serde(default)]
    pub sheet_gid: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Sheets API credentials (one of; without them the sheet's CSV export is read)
    // ─────────────────────────────────────────────────────────────────────────
    /// API key for a link-shared sheet. Read from BABY_UPDATE_API_KEY or GOOGLE_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// OAuth access token. Read from BABY_UPDATE_ACCESS_TOKEN or GOOGLE_ACCESS_TOKEN.
    #[serde(default)]
    pub access_token: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // CSV sources
    // ─────────────────────────────────────────────────────────────────────────
    /// CSV export URL. Takes precedence over the Sheets API.
    #[serde(default)]
    pub csv_url: Option<String>,

    /// Local CSV file. Takes precedence over everything else.
    #[serde(default)]
    pub csv_path: Option<String>,

    /// Hours between feeds (default 3, at most one week).
    #[serde(default)]
    pub feed_interval_hours: Option<f64>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Timeout for each sheet fetch in seconds (default 10).
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

/// Which adapter serves the rows, resolved from the config.
#[derive(Debug, Clone)]
pub enum SourceSettings {
    Csv(CsvLocation),
    SheetsApi {
        sheet_id: String,
        range: String,
        auth: SheetsAuth,
    },
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BABY_UPDATE"));
        if let Ok(path) = std::env::var("BABY_UPDATE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Unprefixed Google variables so an existing .env keeps working
        if cfg.sheet_id.is_none() {
            cfg.sheet_id = std::env::var("GOOGLE_SHEET_ID").ok();
        }
        if cfg.api_key.is_none() {
            cfg.api_key = std::env::var("GOOGLE_API_KEY").ok();
        }
        if cfg.access_token.is_none() {
            cfg.access_token = std::env::var("GOOGLE_ACCESS_TOKEN").ok();
        }
        // PORT is what most hosting platforms inject
        if cfg.port.is_none() {
            if let Ok(s) = std::env::var("PORT") {
                if let Ok(p) = s.parse::<u16>() {
                    cfg.port = Some(p);
                }
            }
        }
        Ok(cfg)
    }

    /// Resolve the row source. Precedence: `csv_path`, `csv_url`, then `sheet_id`.
    /// A `sheet_id` without credentials reads the link-shared CSV export.
    pub fn source_settings(&self) -> Result<SourceSettings, DomainError> {
        if let Some(path) = non_empty(&self.csv_path) {
            return Ok(SourceSettings::Csv(CsvLocation::File(PathBuf::from(path))));
        }
        if let Some(url) = non_empty(&self.csv_url) {
            return Ok(SourceSettings::Csv(CsvLocation::Url(url.to_string())));
        }
        let Some(sheet_id) = non_empty(&self.sheet_id) else {
            return Err(DomainError::Config(
                "no row source: set BABY_UPDATE_CSV_PATH, BABY_UPDATE_CSV_URL or GOOGLE_SHEET_ID"
                    .into(),
            ));
        };
        let auth = if let Some(token) = non_empty(&self.access_token) {
            SheetsAuth::BearerToken(token.to_string())
        } else if let Some(key) = non_empty(&self.api_key) {
            SheetsAuth::ApiKey(key.to_string())
        } else {
            let url = CsvSource::export_url(sheet_id, non_empty(&self.sheet_gid));
            return Ok(SourceSettings::Csv(CsvLocation::Url(url)));
        };
        Ok(SourceSettings::SheetsApi {
            sheet_id: sheet_id.to_string(),
            range: self.sheet_range_or_default(),
            auth,
        })
    }

    pub fn sheet_range_or_default(&self) -> String {
        non_empty(&self.sheet_range)
            .unwrap_or(DEFAULT_SHEET_RANGE)
            .to_string()
    }

    /// Feed interval. 3 hours if unset; values outside `0..=168` hours are rejected.
    pub fn feed_interval(&self) -> Result<TimeDelta, DomainError> {
        let Some(hours) = self.feed_interval_hours else {
            return Ok(DEFAULT_FEED_INTERVAL);
        };
        if !(0.0..=MAX_FEED_INTERVAL_HOURS).contains(&hours) {
            return Err(DomainError::Config(format!(
                "feed_interval_hours must be between 0 and {}, got {}",
                MAX_FEED_INTERVAL_HOURS, hours
            )));
        }
        TimeDelta::try_milliseconds((hours * 3_600_000.0).round() as i64).ok_or_else(|| {
            DomainError::Config(format!("feed_interval_hours out of range: {}", hours))
        })
    }

    pub fn host_or_default(&self) -> String {
        non_empty(&self.host).unwrap_or(DEFAULT_HOST).to_string()
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(
            self.fetch_timeout_secs
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
