//! Wiring & DI. Entry point: load config, pick a row source, serve the status page.
//! No business logic here; status derivation is delegated to StatusService.

use baby_update::adapters::sheets::{CsvSource, SheetsApiSource};
use baby_update::adapters::web::{AppState, ServerConfig, start_server};
use baby_update::ports::{RowSource, StatusPort};
use baby_update::shared::config::{AppConfig, SourceSettings};
use baby_update::usecases::StatusService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;

    // --- Row source: local CSV, CSV export, or Sheets API ---
    let timeout = cfg.fetch_timeout();
    let source: Arc<dyn RowSource> = match cfg
        .source_settings()
        .map_err(|e| anyhow::anyhow!("{}", e))?
    {
        SourceSettings::Csv(location) => {
            info!(location = ?location, "reading events from CSV");
            Arc::new(CsvSource::new(location, timeout)?)
        }
        SourceSettings::SheetsApi {
            sheet_id,
            range,
            auth,
        } => {
            info!(sheet = %sheet_id, range = %range, "reading events from Sheets API");
            Arc::new(SheetsApiSource::new(sheet_id, range, auth, timeout)?)
        }
    };

    // --- Service ---
    let feed_interval = cfg.feed_interval()?;
    info!(
        minutes = feed_interval.num_minutes(),
        "feed interval: {} min",
        feed_interval.num_minutes()
    );
    let status: Arc<dyn StatusPort> = Arc::new(StatusService::new(source, feed_interval));

    // --- Web ---
    let server_cfg = ServerConfig {
        host: cfg.host_or_default(),
        port: cfg.port_or_default(),
    };
    baby_update::adapters::ui::init_ui(&format!("{}:{}", server_cfg.host, server_cfg.port));

    let state = Arc::new(AppState::new(status)?);
    start_server(&server_cfg, state).await?;

    Ok(())
}
