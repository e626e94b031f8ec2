//! Timestamps and identifiers for locally created records.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time as RFC 3339, the format every persisted record uses.
#[must_use]
pub fn now() -> String {
    localstate::timestamp::now_rfc3339()
}

/// Fresh record id such as `msg-1b4e28ba-2fa1-11d2-883f-0016d3cca427`.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
