//! HTTP error responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use timesync_domain::constants::SUMMARY_FAILURE_DETAIL;
use timesync_domain::TimeSyncError;

/// Errors surfaced to HTTP clients as `{"detail": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not deserialize into a time entry.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Looking up, creating, or updating the category summary failed.
    #[error("summary update failed: {0}")]
    Summary(#[source] TimeSyncError),
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Summary(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing detail; upstream error text is never exposed.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidBody(reason) => reason.clone(),
            Self::Summary(_) => SUMMARY_FAILURE_DETAIL.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<TimeSyncError> for ApiError {
    fn from(err: TimeSyncError) -> Self {
        Self::Summary(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDetail { detail: self.detail() })).into_response()
    }
}
