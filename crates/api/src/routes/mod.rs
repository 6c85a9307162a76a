//! HTTP routes

pub mod entries;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppContext;

/// Build the application router.
///
/// Any browser origin may call the API, with credentials.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(health::status))
        .route("/save-time", post(entries::save_time))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(context)
}
