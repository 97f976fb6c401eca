use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format used by the renderer, and by older stores that kept the
/// already-formatted string instead of an instant.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    DISPLAY_FORMAT,
    "%d.%m.%Y, %H:%M",
];

/// Parse a user- or store-supplied timestamp.
///
/// Accepts RFC 3339, the `datetime-local` form (`2024-01-15T10:30`), a
/// space-separated variant, a bare `YYYY-MM-DD` date, and the legacy
/// display format. Inputs without an offset are taken as UTC.
/// Returns `None` when nothing matches.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format_display(time: DateTime<Utc>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}
