//! HTTP handlers for the status page.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML status page |
//! | `GET` | `/api/status` | Snapshot as JSON |
//! | `GET` | `/health` | Liveness check |

use crate::adapters::web::error::WebError;
use crate::adapters::web::template::PageRenderer;
use crate::adapters::web::view::StatusView;
use crate::domain::StatusSnapshot;
use crate::ports::StatusPort;
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use tracing::warn;

/// Shared handler state. Holds no event data; every request asks the port again.
pub struct AppState {
    pub status: Arc<dyn StatusPort>,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(status: Arc<dyn StatusPort>) -> Result<Self, WebError> {
        Ok(Self {
            status,
            renderer: PageRenderer::new()?,
        })
    }
}

/// Render the status page. A fact the log cannot supply renders as a blank field.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let report = state.status.status_report().await.inspect_err(|e| {
        warn!(error = %e, "status unavailable");
    })?;
    Ok(Html(state.renderer.render_index(&StatusView::from(&report))?))
}

pub async fn api_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusSnapshot>, WebError> {
    Ok(Json(state.status.current_status().await?))
}

pub async fn health() -> &'static str {
    "ok"
}
