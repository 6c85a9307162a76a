//! Port interfaces for saving time entries
//!
//! These traits define the boundaries between the entry service and the
//! workspace the records end up in.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use timesync_domain::{LogRecord, NewSummary, Result, SummaryPage, SummaryUpdate};

/// Append-only store of per-entry log records
#[async_trait]
pub trait ActivityLogPort: Send + Sync {
    /// Create one log record.
    async fn create_log(&self, record: &LogRecord) -> Result<()>;
}

/// Store of per-category summary records
#[async_trait]
pub trait SummaryPort: Send + Sync {
    /// Find the summary whose title equals `category` exactly.
    ///
    /// When several match, the first one returned by the store wins.
    async fn find_by_category(&self, category: &str) -> Result<Option<SummaryPage>>;

    /// Create the first summary record for a category.
    async fn create(&self, summary: &NewSummary) -> Result<()>;

    /// Overwrite an existing summary record.
    async fn update(&self, update: &SummaryUpdate) -> Result<()>;
}

/// Source of the local wall-clock time stamped onto records
pub trait Clock: Send + Sync {
    fn local_now(&self) -> NaiveDateTime;
}

/// [`Clock`] backed by the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
