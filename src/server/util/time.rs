use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

/// Storage format for every `created_time` column. Zero-padded and
/// big-endian, so string comparison agrees with chronological order.
pub const CREATED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp for storage.
pub fn format_at(dt: NaiveDateTime) -> String {
    dt.format(CREATED_TIME_FORMAT).to_string()
}

/// Current UTC time in storage format.
pub fn format_now() -> String {
    format_at(Utc::now().naive_utc())
}

/// Parses a stored `created_time` string back into a timestamp.
///
/// # Returns
/// - `Some(NaiveDateTime)` - The string matched the storage format
/// - `None` - Free-text that cannot be interpreted as a timestamp
pub fn parse_created_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, CREATED_TIME_FORMAT).ok()
}

/// Start of the calendar year containing `now`, in storage format. Used as
/// the cutoff for pruning stale search history.
pub fn year_start(now: NaiveDateTime) -> String {
    let jan_first = NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .unwrap_or(now.date())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now);
    format_at(jan_first)
}
