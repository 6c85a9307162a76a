//! # TimeSync API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum routes (`POST /save-time`, `GET /`)
//! - Application context (dependency injection)
//! - Logging setup for the `timesync` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Maps service outcomes onto HTTP responses

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
