//! # TimeSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - Notion integration (client + port adapters)
//! - Configuration loading
//! - Conversions from external errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `timesync-core`
//! - Depends on `timesync-domain` and `timesync-core`
//! - Contains all "impure" code (network, environment, files)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::notion::{NotionActivityLog, NotionClient, NotionSummaryStore};
