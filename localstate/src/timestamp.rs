//! RFC 3339 timestamp helpers.
//!
//! Persisted records carry timestamps as strings so stored JSON stays
//! readable. Ordering goes through parsed instants; strings that fail to parse
//! sort before every valid timestamp.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use std::cmp::Ordering;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current UTC time formatted as RFC 3339.
#[must_use]
pub fn now_rfc3339() -> String {
    format(OffsetDateTime::now_utc())
}

#[must_use]
pub fn format(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}

#[must_use]
pub fn parse(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

/// Chronological ordering of two RFC 3339 strings.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}
