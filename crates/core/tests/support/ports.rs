//! Mock port implementations for testing
//!
//! Every mock records what it was asked to write so tests can assert on the
//! exact payloads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use timesync_core::{ActivityLogPort, Clock, SummaryPort};
use timesync_domain::{
    LogRecord, NewSummary, Result as DomainResult, SummaryPage, SummaryUpdate, TimeSyncError,
};

/// Clock frozen at a fixed local time.
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// 2024-03-15 at the given hour and minute.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(hour, minute, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> NaiveDateTime {
        self.0
    }
}

/// In-memory activity log that can be told to fail.
#[derive(Default)]
pub struct RecordingLogPort {
    records: Mutex<Vec<LogRecord>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingLogPort {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityLogPort for RecordingLogPort {
    async fn create_log(&self, record: &LogRecord) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TimeSyncError::Network("log database unreachable".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// In-memory summary store seeded with at most one existing page.
#[derive(Default)]
pub struct MockSummaryPort {
    existing: Option<SummaryPage>,
    fail_lookup: bool,
    fail_write: bool,
    lookups: Mutex<Vec<String>>,
    created: Mutex<Vec<NewSummary>>,
    updated: Mutex<Vec<SummaryUpdate>>,
}

impl MockSummaryPort {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_page(page_id: &str, total_hours: Option<f64>) -> Self {
        Self {
            existing: Some(SummaryPage { page_id: page_id.into(), total_hours }),
            ..Self::default()
        }
    }

    pub fn failing_lookup() -> Self {
        Self { fail_lookup: true, ..Self::default() }
    }

    pub fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewSummary> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<SummaryUpdate> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryPort for MockSummaryPort {
    async fn find_by_category(&self, category: &str) -> DomainResult<Option<SummaryPage>> {
        self.lookups.lock().unwrap().push(category.to_string());
        if self.fail_lookup {
            return Err(TimeSyncError::Upstream("query rejected".into()));
        }
        Ok(self.existing.clone())
    }

    async fn create(&self, summary: &NewSummary) -> DomainResult<()> {
        if self.fail_write {
            return Err(TimeSyncError::InvalidInput("validation_error".into()));
        }
        self.created.lock().unwrap().push(summary.clone());
        Ok(())
    }

    async fn update(&self, update: &SummaryUpdate) -> DomainResult<()> {
        if self.fail_write {
            return Err(TimeSyncError::InvalidInput("validation_error".into()));
        }
        self.updated.lock().unwrap().push(update.clone());
        Ok(())
    }
}
