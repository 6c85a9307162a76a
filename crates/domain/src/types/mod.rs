//! Domain types and models

pub mod entry;
pub mod outcome;
pub mod records;

pub use entry::{
    duration_hours, duration_minutes, format_activity_time, round_to, weekday_name, DerivedEntry,
    TimeEntry,
};
pub use outcome::{accumulate_hours, LogOutcome, SaveOutcome, SummaryAction};
pub use records::{LogRecord, NewSummary, SummaryFields, SummaryPage, SummaryUpdate};
