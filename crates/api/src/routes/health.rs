//! Liveness route

use axum::Json;
use serde::Serialize;
use timesync_domain::constants::ROOT_STATUS;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /`
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: ROOT_STATUS })
}
