//! Time entry routes

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use timesync_domain::constants::SAVE_SUCCESS_MESSAGE;
use timesync_domain::TimeEntry;

use crate::error::ApiError;
use crate::utils::logging::log_save_result;
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `POST /save-time`
///
/// Succeeds whenever the summary stage succeeds, even if the log page
/// could not be written.
pub async fn save_time(
    State(context): State<Arc<AppContext>>,
    payload: Result<Json<TimeEntry>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(entry) = payload?;

    let started = Instant::now();
    let result = context.entry_service.record_entry(&entry).await;
    log_save_result(&entry.category, started.elapsed(), &result);

    result?;
    Ok(Json(MessageResponse { message: SAVE_SUCCESS_MESSAGE }))
}
