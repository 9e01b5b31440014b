//! Date and time utility functions
//!
//! Parsing of server timestamps and human-readable "saved ..." labels for the
//! saved-words list.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date format used when a saved word is older than a week
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layouts accepted in addition to RFC 3339. Naive values are taken as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parse a timestamp as sent by the API.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`, `...+07:00`) and timezone-less
/// values (`2024-05-01T10:00:00.123456`), which SQLite-backed servers emit.
pub fn parse_server_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Describe when a word was saved, relative to `now`
///
/// # Returns
/// * `"today"`, `"yesterday"`, `"N days ago"` within a week, the date otherwise
pub fn format_saved_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - created_at.date_naive()).num_days();
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "yesterday".to_string(),
        d if d <= 7 => format!("{d} days ago"),
        _ => created_at.format(DISPLAY_DATE_FORMAT).to_string(),
    }
}
