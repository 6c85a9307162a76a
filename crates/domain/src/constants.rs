//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Unit conversions
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
pub const MINUTES_PRECISION: u32 = 2;
pub const HOURS_PRECISION: u32 = 4;

// Date handling
pub const DAY_FORMAT: &str = "%Y-%m-%d";
pub const ACTIVITY_TIME_FORMAT: &str = "%I:%M %p";
pub const INVALID_DATE_PLACEHOLDER: &str = "Invalid Date";

// Log database properties
pub const LOG_TITLE_PROPERTY: &str = "Activity";
pub const LOG_DURATION_PROPERTY: &str = "Duration (min)";
pub const LOG_DATE_PROPERTY: &str = "Date";

// Summary database properties
pub const SUMMARY_TITLE_PROPERTY: &str = "Category";
pub const SUMMARY_TOTAL_PROPERTY: &str = "Total Hours";
pub const SUMMARY_TARGET_PROPERTY: &str = "Target Hours";
pub const SUMMARY_DATE_PROPERTY: &str = "Last Activity Date";

// Shared by both databases
pub const WEEKDAY_PROPERTY: &str = "Day of Week";
pub const ACTIVITY_TIME_PROPERTY: &str = "Last Activity Time";

// HTTP surface
pub const SAVE_SUCCESS_MESSAGE: &str = "Log saved and summary updated successfully!";
pub const SUMMARY_FAILURE_DETAIL: &str = "Failed to update Notion summary.";
pub const ROOT_STATUS: &str = "Timer API is running";
