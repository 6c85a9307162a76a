//! Record shapes written to the workspace databases

use serde::{Deserialize, Serialize};

use super::entry::{DerivedEntry, TimeEntry};

/// One append-only log page per saved entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub activity: String,
    pub duration_minutes: f64,
    /// Raw request day, forwarded even when it failed to parse.
    pub date: String,
    pub weekday: String,
    pub activity_time: String,
}

impl LogRecord {
    pub fn new(entry: &TimeEntry, derived: &DerivedEntry) -> Self {
        Self {
            activity: entry.category.clone(),
            duration_minutes: derived.duration_minutes,
            date: entry.day.clone(),
            weekday: derived.weekday.clone(),
            activity_time: derived.activity_time.clone(),
        }
    }
}

/// Summary fields overwritten on every request, whether the page is new or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFields {
    pub target_hours: f64,
    pub last_activity_date: String,
    pub weekday: String,
    pub activity_time: String,
}

impl SummaryFields {
    pub fn new(entry: &TimeEntry, derived: &DerivedEntry) -> Self {
        Self {
            target_hours: entry.target,
            last_activity_date: entry.day.clone(),
            weekday: derived.weekday.clone(),
            activity_time: derived.activity_time.clone(),
        }
    }
}

/// An existing per-category summary page as read back from the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPage {
    pub page_id: String,
    /// `None` when the property is missing or empty.
    pub total_hours: Option<f64>,
}

/// Payload for creating the first summary page of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSummary {
    pub category: String,
    pub total_hours: f64,
    pub fields: SummaryFields,
}

/// Payload for updating an existing summary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryUpdate {
    pub page_id: String,
    pub total_hours: f64,
    pub fields: SummaryFields,
}
