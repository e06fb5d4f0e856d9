//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` in the system time zone as `YYYY-MM-DD HH:MM TZ`.
///
/// Habit cards only need minute precision for the creation time.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> LocalDateTime<'a> {
    /// Formats in an explicit time zone instead of the system one.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%Y-%m-%d %H:%M %Z").to_string()
    }
}

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_zone(TimeZone::system()))
    }
}
