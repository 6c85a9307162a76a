//! Notion integration for activity logs and category summaries
//!
//! # Architecture
//!
//! - **Client**: `NotionClient` - HTTP wrapper for the pages and database query endpoints
//! - **Types**: Request/response shapes and typed property values
//! - **Adapters**: `NotionActivityLog` and `NotionSummaryStore` implement the core entry ports
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use timesync_core::EntryService;
//! use timesync_domain::{NotionConfig, TimeEntry};
//! use timesync_infra::http::HttpClient;
//! use timesync_infra::integrations::notion::{NotionActivityLog, NotionClient, NotionSummaryStore};
//! # async fn example(config: NotionConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(NotionClient::new(&config, HttpClient::builder().build()?)?);
//!
//! let service = EntryService::new(
//!     Arc::new(NotionActivityLog::new(client.clone(), &config.logs_database_id)),
//!     Arc::new(NotionSummaryStore::new(client, &config.summary_database_id)),
//! );
//!
//! let entry = TimeEntry {
//!     category: "Reading".into(),
//!     duration: 1_800_000,
//!     day: "2024-03-15".into(),
//!     target: 2.0,
//! };
//! let outcome = service.record_entry(&entry).await?;
//! println!("summary total: {}", outcome.summary.total_hours());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - **Transport errors**: surfaced as `NotionError::Network`
//! - **401/403**: `NotionError::Authentication`
//! - **429**: `NotionError::RateLimited`
//! - **Other non-2xx**: `NotionError::Api` carrying Notion's `code` and `message`

pub mod adapters;
pub mod client;
pub mod types;

pub use adapters::{NotionActivityLog, NotionSummaryStore};
pub use client::NotionClient;
pub use types::{NotionError, Page, Properties, PropertyValue, QueryResponse, TitleFilter};
