use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-unique counter value for generating distinct default
/// field values (emails, names, coordinates) across factory calls.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Formats a timestamp the way the application stores `created_time`
/// columns.
pub fn format_time(dt: chrono::NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time in the application's `created_time` format.
pub fn now_string() -> String {
    format_time(chrono::Utc::now().naive_utc())
}
