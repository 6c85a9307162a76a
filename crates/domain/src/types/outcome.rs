//! Stage outcomes reported by the entry service
//!
//! A save runs two stages against the workspace. Only the summary stage can
//! fail the request; the log stage outcome is reported alongside it.

use serde::{Deserialize, Serialize};

use super::entry::{round_hours, DerivedEntry};

/// Result of the log-page stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogOutcome {
    Written,
    Failed { reason: String },
}

impl LogOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Written => "log_written",
            Self::Failed { .. } => "log_failed",
        }
    }
}

/// What the summary stage did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SummaryAction {
    Created { total_hours: f64 },
    Updated { page_id: String, previous_hours: f64, total_hours: f64 },
}

impl SummaryAction {
    pub fn total_hours(&self) -> f64 {
        match self {
            Self::Created { total_hours } | Self::Updated { total_hours, .. } => *total_hours,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Created { .. } => "summary_created",
            Self::Updated { .. } => "summary_updated",
        }
    }
}

/// Combined outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub derived: DerivedEntry,
    pub log: LogOutcome,
    pub summary: SummaryAction,
}

/// New summary total: previous total (missing counts as zero) plus the
/// increment, rounded to four decimals.
pub fn accumulate_hours(previous: Option<f64>, increment: f64) -> f64 {
    round_hours(previous.unwrap_or(0.0) + increment)
}
