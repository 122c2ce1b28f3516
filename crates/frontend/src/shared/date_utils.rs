/// Utilities for date and time formatting
///
/// The log events API speaks UTC ("2024-03-15 14:02:26"), the table shows local time.
use chrono::{NaiveDateTime, TimeZone, Utc};

const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert an API timestamp to the browser's local time
pub fn format_utc_as_local(value: &str) -> String {
    format_utc_in(value, &chrono::Local)
}

/// Convert an API timestamp into `tz`
/// Example: "2024-03-15 14:02:26" in UTC+3 -> "2024-03-15 17:02:26"
pub fn format_utc_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match NaiveDateTime::parse_from_str(value.trim(), API_TIMESTAMP_FORMAT) {
        Ok(naive) => Utc
            .from_utc_datetime(&naive)
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string(),
        Err(_) => value.to_string(),
    }
}
