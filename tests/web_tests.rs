//! Integration tests for the status page routes.
//!
//! Drives the Axum `Router` directly via `tower::ServiceExt` with an
//! in-memory row source; no TCP listener or network access.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use baby_update::adapters::sheets::MemorySource;
use baby_update::adapters::web::{AppState, build_router};
use baby_update::domain::{DEFAULT_FEED_INTERVAL, DomainError, StatusReport, StatusSnapshot};
use baby_update::ports::StatusPort;
use baby_update::usecases::StatusService;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const HEADER: [&str; 4] = ["Timestamp", "Diaper", "Formula (mL)", "Person"];

fn router_for(rows: &[[&str; 4]]) -> axum::Router {
    let mut all = vec![HEADER];
    all.extend_from_slice(rows);
    let service = StatusService::new(
        Arc::new(MemorySource::from_rows(&all)),
        DEFAULT_FEED_INTERVAL,
    );
    let state = AppState::new(Arc::new(service)).unwrap();
    build_router(Arc::new(state))
}

fn full_log() -> axum::Router {
    router_for(&[
        ["10/15/2022 09:00:00", "", "90", "Alice"],
        ["10/15/2022 12:00:00", "Poop", "", "Bob"],
        ["10/15/2022 13:00:00", "Pee", "120", "Alice, Bob"],
    ])
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_status() {
    let (status, html) = get(full_log(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("1:00 PM (Sat) (120 mL)"));
    assert!(html.contains("4:00 PM (Sat)"));
    assert!(html.contains("12:00 PM (Sat)"));
}

#[tokio::test]
async fn index_renders_notice_when_no_dirty_diaper() {
    let router = router_for(&[["10/15/2022 13:00:00", "Pee", "120", "Alice"]]);
    let (status, html) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No dirty diapers recorded yet."));
    // Known facts still render.
    assert!(html.contains("1:00 PM (Sat) (120 mL)"));
    assert!(html.contains("4:00 PM (Sat)"));
}

#[tokio::test]
async fn index_renders_dirty_diaper_without_feedings() {
    let router = router_for(&[["10/15/2022 12:00:00", "Poop", "", "Bob"]]);
    let (status, html) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No feedings recorded yet."));
    assert!(html.contains("12:00 PM (Sat)"));
    assert!(!html.contains(" mL)"));
}

#[tokio::test]
async fn api_status_returns_snapshot() {
    let (status, body) = get(full_log(), "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["most_recent_feed_time"], "2022-10-15T13:00:00");
    assert_eq!(json["most_recent_feed_amount"], 120.0);
    assert_eq!(json["predicted_next_feed_time"], "2022-10-15T16:00:00");
    assert_eq!(json["most_recent_dirty_diaper_time"], "2022-10-15T12:00:00");
}

#[tokio::test]
async fn api_status_missing_feed_is_not_found() {
    let router = router_for(&[["10/15/2022 12:00:00", "Poop", "", "Bob"]]);
    let (status, body) = get(router, "/api/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "no feeding event found");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn malformed_row_is_server_error() {
    let router = router_for(&[["not-a-date", "Pee", "3", "Alice"]]);
    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("sheet row 2"));
}

struct FailingSource;

#[async_trait::async_trait]
impl StatusPort for FailingSource {
    async fn current_status(&self) -> Result<StatusSnapshot, DomainError> {
        Err(DomainError::Source("connection refused".into()))
    }

    async fn status_report(&self) -> Result<StatusReport, DomainError> {
        Err(DomainError::Source("connection refused".into()))
    }
}

#[tokio::test]
async fn source_failure_is_bad_gateway() {
    let state = AppState::new(Arc::new(FailingSource)).unwrap();
    let (status, body) = get(build_router(Arc::new(state)), "/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("connection refused"));
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(full_log(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
