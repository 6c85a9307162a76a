//! Integration tests for the entry service
//!
//! Drives `EntryService` against in-memory ports and checks the payloads of
//! both stages and the asymmetric failure handling between them.

mod support;

use std::sync::Arc;

use support::ports::{FixedClock, MockSummaryPort, RecordingLogPort};
use timesync_core::EntryService;
use timesync_domain::constants::INVALID_DATE_PLACEHOLDER;
use timesync_domain::{LogOutcome, SummaryAction, TimeEntry, TimeSyncError};

fn entry(category: &str, duration: i64, day: &str, target: f64) -> TimeEntry {
    TimeEntry { category: category.into(), duration, day: day.into(), target }
}

fn service(logs: &Arc<RecordingLogPort>, summaries: &Arc<MockSummaryPort>) -> EntryService {
    EntryService::new(logs.clone(), summaries.clone()).with_clock(Arc::new(FixedClock::at(16, 20)))
}

#[tokio::test]
async fn creates_log_and_new_summary_for_unknown_category() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::empty());

    let outcome = service(&logs, &summaries)
        .record_entry(&entry("Reading", 2_700_000, "2024-03-15", 1.5))
        .await
        .expect("save succeeds");

    let records = logs.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].activity, "Reading");
    assert_eq!(records[0].duration_minutes, 45.0);
    assert_eq!(records[0].date, "2024-03-15");
    assert_eq!(records[0].weekday, "Friday");
    assert_eq!(records[0].activity_time, "04:20 PM");

    assert_eq!(summaries.lookups(), vec!["Reading".to_string()]);
    let created = summaries.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].category, "Reading");
    assert_eq!(created[0].total_hours, 0.75);
    assert_eq!(created[0].fields.target_hours, 1.5);
    assert_eq!(created[0].fields.last_activity_date, "2024-03-15");
    assert!(summaries.updated().is_empty());

    assert_eq!(outcome.log, LogOutcome::Written);
    assert_eq!(outcome.summary, SummaryAction::Created { total_hours: 0.75 });
}

#[tokio::test]
async fn new_summary_total_is_rounded_to_four_decimals() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::empty());

    service(&logs, &summaries)
        .record_entry(&entry("Music", 1_000, "2024-03-15", 1.0))
        .await
        .expect("save succeeds");

    // 1000 ms = 0.000277... h
    assert_eq!(summaries.created()[0].total_hours, 0.0003);
}

#[tokio::test]
async fn accumulates_onto_existing_summary_and_overwrites_target() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::with_page("page-42", Some(2.5)));

    let outcome = service(&logs, &summaries)
        .record_entry(&entry("Coding", 1_800_000, "2024-03-15", 8.0))
        .await
        .expect("save succeeds");

    let updated = summaries.updated();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].page_id, "page-42");
    assert_eq!(updated[0].total_hours, 3.0);
    assert_eq!(updated[0].fields.target_hours, 8.0);
    assert_eq!(updated[0].fields.weekday, "Friday");
    assert_eq!(updated[0].fields.activity_time, "04:20 PM");
    assert!(summaries.created().is_empty());

    assert_eq!(
        outcome.summary,
        SummaryAction::Updated { page_id: "page-42".into(), previous_hours: 2.5, total_hours: 3.0 }
    );
}

#[tokio::test]
async fn existing_summary_without_total_starts_from_zero() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::with_page("page-7", None));

    service(&logs, &summaries)
        .record_entry(&entry("Coding", 900_000, "2024-03-15", 2.0))
        .await
        .expect("save succeeds");

    assert_eq!(summaries.updated()[0].total_hours, 0.25);
}

#[tokio::test]
async fn malformed_day_still_runs_both_stages() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::empty());

    let outcome = service(&logs, &summaries)
        .record_entry(&entry("Reading", 60_000, "not-a-date", 1.0))
        .await
        .expect("malformed day is not fatal");

    assert_eq!(logs.attempts(), 1);
    assert_eq!(logs.records()[0].weekday, INVALID_DATE_PLACEHOLDER);
    assert_eq!(logs.records()[0].date, "not-a-date");

    let created = summaries.created();
    assert_eq!(created[0].fields.weekday, INVALID_DATE_PLACEHOLDER);
    assert_eq!(created[0].fields.last_activity_date, "not-a-date");
    assert!(!outcome.derived.day_is_valid);
}

#[tokio::test]
async fn log_failure_does_not_stop_summary_stage() {
    let logs = Arc::new(RecordingLogPort::failing());
    let summaries = Arc::new(MockSummaryPort::empty());

    let outcome = service(&logs, &summaries)
        .record_entry(&entry("Reading", 3_600_000, "2024-03-15", 1.0))
        .await
        .expect("summary stage decides the result");

    assert_eq!(logs.attempts(), 1);
    assert!(matches!(outcome.log, LogOutcome::Failed { ref reason } if reason.contains("unreachable")));
    assert_eq!(summaries.created().len(), 1);
    assert_eq!(outcome.summary.total_hours(), 1.0);
}

#[tokio::test]
async fn summary_lookup_failure_is_returned() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::failing_lookup());

    let result =
        service(&logs, &summaries).record_entry(&entry("Reading", 60_000, "2024-03-15", 1.0)).await;

    assert!(matches!(result, Err(TimeSyncError::Upstream(_))));
    // The log stage runs first and is unaffected.
    assert_eq!(logs.records().len(), 1);
    assert!(summaries.created().is_empty());
}

#[tokio::test]
async fn summary_write_failure_is_returned() {
    let logs = Arc::new(RecordingLogPort::default());
    let summaries = Arc::new(MockSummaryPort::with_page("page-1", Some(1.0)).failing_write());

    let result =
        service(&logs, &summaries).record_entry(&entry("Reading", 60_000, "2024-03-15", 1.0)).await;

    assert!(matches!(result, Err(TimeSyncError::InvalidInput(_))));
}
