use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use timesync_api::{router, AppContext};
use timesync_domain::{
    Config, DocumentStoreConfig, HttpConfig, LoggingConfig, NotionConfig, ServerConfig,
};
use tower::ServiceExt;
use wiremock::MockServer;

/// Build a router whose Notion client points at `server`.
pub fn test_router(server: &MockServer) -> Router {
    let config = Config {
        server: ServerConfig::default(),
        notion: NotionConfig {
            api_key: "secret_test".to_string(),
            logs_database_id: "logs-db".to_string(),
            summary_database_id: "summary-db".to_string(),
            api_url: server.uri(),
            api_version: "2022-06-28".to_string(),
        },
        document_store: DocumentStoreConfig::default(),
        http: HttpConfig { timeout_seconds: 5, max_attempts: 1 },
        logging: LoggingConfig::default(),
    };

    let context = AppContext::new(config).expect("failed to build AppContext");
    router(Arc::new(context))
}

/// Send one request through the router and decode the JSON response.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("readable body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn save_time_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/save-time")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}
