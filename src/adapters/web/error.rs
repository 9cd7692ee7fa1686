//! Web adapter errors and their HTTP mapping.

use crate::domain::{DomainError, SummaryError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("template error: {0}")]
    Template(String),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::Source(_)) => StatusCode::BAD_GATEWAY,
            Self::Domain(DomainError::Summary(SummaryError::FeedTimeOutOfRange)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Domain(DomainError::Summary(_)) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::Parse(_) | DomainError::Config(_)) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        (status, axum::Json(body)).into_response()
    }
}
