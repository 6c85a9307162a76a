//! Inbound time entry and the values derived from it

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTIVITY_TIME_FORMAT, DAY_FORMAT, HOURS_PRECISION, INVALID_DATE_PLACEHOLDER,
    MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MINUTES_PRECISION,
};

/// A finished timer session posted by the client.
///
/// Nothing here is validated: negative durations, empty categories and
/// malformed days are all forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub category: String,
    /// Elapsed time in milliseconds.
    pub duration: i64,
    /// Calendar day, expected as `YYYY-MM-DD`.
    pub day: String,
    /// Target hours for the category.
    pub target: f64,
}

/// Values computed from a [`TimeEntry`] before anything is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedEntry {
    pub duration_minutes: f64,
    /// Unrounded; rounding happens when the summary total is computed.
    pub duration_hours: f64,
    pub weekday: String,
    pub activity_time: String,
    pub day_is_valid: bool,
}

impl DerivedEntry {
    /// Derive all values for `entry`, stamping it with `now` (local time).
    pub fn derive(entry: &TimeEntry, now: NaiveDateTime) -> Self {
        let parsed = parse_day(&entry.day);

        Self {
            duration_minutes: duration_minutes(entry.duration),
            duration_hours: duration_hours(entry.duration),
            weekday: parsed
                .map(|date| date.format("%A").to_string())
                .unwrap_or_else(|| INVALID_DATE_PLACEHOLDER.to_string()),
            activity_time: format_activity_time(now),
            day_is_valid: parsed.is_some(),
        }
    }
}

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value, with exact ties going to the even digit:
/// `0.015` (stored just below the half) becomes `0.01` and `0.125` becomes
/// `0.12`. Scaling by a power of ten first would add its own error.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{value:.prec$}", prec = places as usize).parse().unwrap_or(value)
}

/// Milliseconds to minutes, rounded to two decimals.
pub fn duration_minutes(duration_ms: i64) -> f64 {
    round_to(duration_ms as f64 / MILLIS_PER_MINUTE, MINUTES_PRECISION)
}

/// Milliseconds to hours, unrounded.
pub fn duration_hours(duration_ms: i64) -> f64 {
    duration_ms as f64 / MILLIS_PER_HOUR
}

/// English weekday name for a `YYYY-MM-DD` day, or the invalid-date placeholder.
pub fn weekday_name(day: &str) -> String {
    parse_day(day)
        .map(|date| date.format("%A").to_string())
        .unwrap_or_else(|| INVALID_DATE_PLACEHOLDER.to_string())
}

/// 12-hour clock with AM/PM marker, e.g. `03:07 PM`.
pub fn format_activity_time(now: NaiveDateTime) -> String {
    now.format(ACTIVITY_TIME_FORMAT).to_string()
}

/// Only digits and `-` are accepted; chrono would otherwise allow a signed
/// year and leading whitespace.
fn parse_day(day: &str) -> Option<NaiveDate> {
    let plain = day.starts_with(|c: char| c.is_ascii_digit())
        && day.bytes().all(|b| b.is_ascii_digit() || b == b'-');
    if !plain {
        return None;
    }
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

/// Round a summary total to the stored precision.
pub(crate) fn round_hours(hours: f64) -> f64 {
    round_to(hours, HOURS_PRECISION)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn converts_milliseconds_to_minutes_and_hours() {
        assert_eq!(duration_minutes(90_000), 1.5);
        assert_eq!(duration_minutes(100_000), 1.67);
        assert_eq!(duration_hours(1_800_000), 0.5);
        assert_eq!(duration_hours(1_000), 1_000.0 / 3_600_000.0);
        assert_eq!(duration_minutes(0), 0.0);
    }

    #[test]
    fn minutes_round_like_the_exact_binary_value() {
        // 900 ms = 0.015 min, stored just below the half
        assert_eq!(duration_minutes(900), 0.01);
        // 7500 ms = 0.125 min exactly, tie goes to even
        assert_eq!(duration_minutes(7_500), 0.12);
        assert_eq!(duration_minutes(22_500), 0.38);
    }

    #[test]
    fn round_to_matches_decimal_rounding() {
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.045, 2), 0.04);
        assert_eq!(round_to(0.03125, 4), 0.0312);
        assert_eq!(round_to(-1.0, 2), -1.0);
        assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
    }

    #[test]
    fn resolves_weekday_names() {
        assert_eq!(weekday_name("2024-03-15"), "Friday");
        assert_eq!(weekday_name("2023-12-31"), "Sunday");
    }

    #[test]
    fn substitutes_placeholder_for_unparsable_day() {
        assert_eq!(weekday_name("not-a-date"), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name("2024-02-30"), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name(""), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name("+2024-03-15"), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name(" 2024-03-15"), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name("2024-03-15 "), INVALID_DATE_PLACEHOLDER);
        assert_eq!(weekday_name("2024- 3-15"), INVALID_DATE_PLACEHOLDER);
    }

    #[test]
    fn formats_activity_time_on_twelve_hour_clock() {
        assert_eq!(format_activity_time(at(15, 7)), "03:07 PM");
        assert_eq!(format_activity_time(at(0, 30)), "12:30 AM");
        assert_eq!(format_activity_time(at(12, 0)), "12:00 PM");
    }

    #[test]
    fn derive_keeps_hours_unrounded() {
        let entry = TimeEntry {
            category: "Reading".into(),
            duration: 1_234_567,
            day: "2024-03-15".into(),
            target: 2.0,
        };

        let derived = DerivedEntry::derive(&entry, at(9, 5));

        assert_eq!(derived.duration_hours, 1_234_567.0 / 3_600_000.0);
        assert_eq!(derived.duration_minutes, 20.58);
        assert_eq!(derived.weekday, "Friday");
        assert_eq!(derived.activity_time, "09:05 AM");
        assert!(derived.day_is_valid);
    }

    #[test]
    fn derive_flags_invalid_day() {
        let entry = TimeEntry {
            category: "Reading".into(),
            duration: 60_000,
            day: "15/03/2024".into(),
            target: 1.0,
        };

        let derived = DerivedEntry::derive(&entry, at(9, 5));

        assert_eq!(derived.weekday, INVALID_DATE_PLACEHOLDER);
        assert!(!derived.day_is_valid);
    }

    #[test]
    fn entry_deserializes_from_request_body() {
        let entry: TimeEntry = serde_json::from_str(
            r#"{"category":"Coding","duration":3600000,"day":"2024-03-15","target":4}"#,
        )
        .unwrap();

        assert_eq!(entry.duration, 3_600_000);
        assert_eq!(entry.target, 4.0);
    }
}
