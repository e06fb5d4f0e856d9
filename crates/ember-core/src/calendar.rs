//! Calendar day keys and the clock they are read from.
//!
//! Habits are tracked in whole local calendar days. A [`DayKey`] is a
//! date-only value that renders as zero-padded `YYYY-MM-DD`, so its string
//! ordering and its chronological ordering agree. Differences between keys
//! are computed on the civil calendar, which keeps them exact across
//! daylight-saving transitions.

use std::{
    fmt,
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use jiff::{civil::Date, Zoned};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// A calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(Date);

impl DayKey {
    /// Builds a key from year, month and day, rejecting impossible dates.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self> {
        Date::new(year, month, day).map(Self).map_err(|e| {
            TrackerError::invalid_input("day").with_reason(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date: {e}"
            ))
        })
    }

    /// The underlying civil date.
    pub fn date(&self) -> Date {
        self.0
    }

    /// Whole calendar days from `self` to `later` (`later - self`).
    ///
    /// Negative when `later` is actually earlier.
    pub fn days_until(&self, later: DayKey) -> i64 {
        i64::from((later.0 - self.0).get_days())
    }
}

impl From<Date> for DayKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DayKey {
    type Err = TrackerError;

    /// Parses strict `YYYY-MM-DD` keys.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            TrackerError::invalid_input("day")
                .with_reason(format!("expected a YYYY-MM-DD day key, got '{s}'"))
        };

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year = s[0..4].parse::<i16>().map_err(|_| invalid())?;
        let month = s[5..7].parse::<i8>().map_err(|_| invalid())?;
        let day = s[8..10].parse::<i8>().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for DayKey {
    type Error = TrackerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant in the host's local time zone.
    fn now(&self) -> Zoned;
}

/// Reads the host's wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Zoned>,
}

impl ManualClock {
    pub fn new(now: Zoned) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: Zoned) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Zoned {
        self.now
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// The key of the local calendar day `clock` is currently in.
pub fn today_key(clock: &dyn Clock) -> DayKey {
    DayKey(clock.now().date())
}

/// Whole calendar days between two keys, `b - a`.
pub fn day_delta(a: DayKey, b: DayKey) -> i64 {
    a.days_until(b)
}
