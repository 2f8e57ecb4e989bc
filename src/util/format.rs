//! Display helpers for server timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// The date part of an RFC 3339 timestamp, for list rows.
///
/// The backend sends full datetimes; the admin lists only show the day.
/// Falls back to the input unchanged when it is shorter than a date.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// Trimmed form input as an optional payload field.
///
/// Blank inputs become `None` so update payloads leave the field alone
/// instead of storing an empty string.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
