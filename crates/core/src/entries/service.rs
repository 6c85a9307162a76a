//! Entry service - turns one time entry into a log record and a summary upsert

use std::sync::Arc;

use timesync_domain::{
    accumulate_hours, DerivedEntry, LogOutcome, LogRecord, NewSummary, Result, SaveOutcome,
    SummaryAction, SummaryFields, SummaryUpdate, TimeEntry,
};
use tracing::{error, info, warn};

use super::ports::{ActivityLogPort, Clock, SummaryPort, SystemClock};

/// Saves time entries to the activity log and the per-category summary.
///
/// The two stages run in order and never concurrently. A failed log write
/// is reported in [`SaveOutcome::log`] and does not stop the summary stage;
/// a failed summary read or write is returned as the error of
/// [`EntryService::record_entry`].
///
/// The summary read-modify-write is not atomic: two concurrent saves for the
/// same category can both read the same total and one increment is lost.
pub struct EntryService {
    logs: Arc<dyn ActivityLogPort>,
    summaries: Arc<dyn SummaryPort>,
    clock: Arc<dyn Clock>,
}

impl EntryService {
    /// Create a new entry service using the system clock
    pub fn new(logs: Arc<dyn ActivityLogPort>, summaries: Arc<dyn SummaryPort>) -> Self {
        Self { logs, summaries, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock used to stamp the last activity time
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Save one entry.
    ///
    /// # Errors
    /// Returns the summary stage error if looking up, creating, or updating
    /// the category summary fails. Log stage errors are never returned.
    pub async fn record_entry(&self, entry: &TimeEntry) -> Result<SaveOutcome> {
        let derived = DerivedEntry::derive(entry, self.clock.local_now());

        if !derived.day_is_valid {
            warn!(day = %entry.day, "entry day is not YYYY-MM-DD; using placeholder weekday");
        }

        let log = self.write_log(entry, &derived).await;
        let summary = self.upsert_summary(entry, &derived).await?;

        info!(
            category = %entry.category,
            log = log.label(),
            summary = summary.label(),
            total_hours = summary.total_hours(),
            "entry saved"
        );

        Ok(SaveOutcome { derived, log, summary })
    }

    async fn write_log(&self, entry: &TimeEntry, derived: &DerivedEntry) -> LogOutcome {
        let record = LogRecord::new(entry, derived);

        match self.logs.create_log(&record).await {
            Ok(()) => {
                info!(weekday = %record.weekday, day = %record.date, "created activity log");
                LogOutcome::Written
            }
            Err(err) => {
                error!(
                    category = %entry.category,
                    error = %err,
                    error_type = err.label(),
                    "failed to create activity log; continuing with summary"
                );
                LogOutcome::Failed { reason: err.to_string() }
            }
        }
    }

    async fn upsert_summary(
        &self,
        entry: &TimeEntry,
        derived: &DerivedEntry,
    ) -> Result<SummaryAction> {
        let fields = SummaryFields::new(entry, derived);

        let existing = self.summaries.find_by_category(&entry.category).await.map_err(|err| {
            error!(category = %entry.category, error = %err, "summary lookup failed");
            err
        })?;

        match existing {
            Some(page) => {
                let previous_hours = page.total_hours.unwrap_or(0.0);
                let total_hours = accumulate_hours(page.total_hours, derived.duration_hours);
                let update =
                    SummaryUpdate { page_id: page.page_id.clone(), total_hours, fields };

                self.summaries.update(&update).await.map_err(|err| {
                    error!(category = %entry.category, error = %err, "summary update failed");
                    err
                })?;

                info!(category = %entry.category, previous_hours, total_hours, "updated summary");
                Ok(SummaryAction::Updated { page_id: page.page_id, previous_hours, total_hours })
            }
            None => {
                let total_hours = accumulate_hours(None, derived.duration_hours);
                let summary = NewSummary { category: entry.category.clone(), total_hours, fields };

                self.summaries.create(&summary).await.map_err(|err| {
                    error!(category = %entry.category, error = %err, "summary create failed");
                    err
                })?;

                info!(category = %entry.category, total_hours, "created summary");
                Ok(SummaryAction::Created { total_hours })
            }
        }
    }
}
