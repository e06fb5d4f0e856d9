//! Habit model definition and the repair of persisted state.

use std::{num::NonZeroU32, str::FromStr};

use jiff::Timestamp;
use log::warn;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

use crate::{calendar::DayKey, error::TrackerError};

/// A tracked habit and its completion counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Habit {
    /// Unique identifier for the habit
    pub id: u64,

    /// Trimmed, non-empty display name
    pub name: String,

    /// Target completions per calendar day; `None` means a single completion
    /// marks the day done
    #[serde(default)]
    pub goal_per_day: Option<NonZeroU32>,

    /// Consecutive calendar days with at least one completion, ending on
    /// `last_completed_day`
    #[serde(default)]
    pub streak: u32,

    /// Day of the most recent completion
    #[serde(default)]
    pub last_completed_day: Option<DayKey>,

    /// Completions recorded on `last_completed_day`.
    ///
    /// Only meaningful while `last_completed_day` is today; read it through
    /// [`crate::engine::completions_on`].
    #[serde(default)]
    pub completions_today: u32,

    /// Lifetime number of completions
    #[serde(default)]
    pub total_completions: u64,

    /// Timestamp when the habit was created (UTC)
    pub created_at: Timestamp,
}

impl Habit {
    /// A freshly created habit: all counters zero, never completed.
    pub fn new(id: u64, name: String, goal_per_day: Option<NonZeroU32>, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            goal_per_day,
            streak: 0,
            last_completed_day: None,
            completions_today: 0,
            total_completions: 0,
            created_at,
        }
    }
}

/// A habit row exactly as the store holds it, before invariants are checked.
///
/// Every column except the id is kept as the raw SQLite value, so a row
/// written by an older or buggy client (a text goal, a REAL counter, a
/// mangled timestamp) still loads and is then repaired by
/// [`HabitRecord::into_habit`].
#[derive(Debug, Clone, PartialEq)]
pub struct HabitRecord {
    pub id: u64,
    pub name: Value,
    pub goal_per_day: Value,
    pub streak: Value,
    pub last_completed_day: Value,
    pub completions_today: Value,
    pub total_completions: Value,
    pub created_at: Value,
}

impl HabitRecord {
    /// Converts the raw row into a [`Habit`], replacing every invalid value
    /// with the nearest valid one and logging each repair.
    pub fn into_habit(self) -> Habit {
        let id = self.id;
        let report = |field: &'static str, value: String, healed: String| {
            warn!(
                "{}",
                TrackerError::CorruptState {
                    id,
                    field,
                    value,
                    healed,
                }
            );
        };

        let name = match &self.name {
            Value::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
            raw => {
                let healed = format!("Habit {id}");
                report("name", describe(raw), healed.clone());
                healed
            }
        };

        let goal_per_day = match &self.goal_per_day {
            Value::Null => None,
            raw => {
                let goal = integer(raw)
                    .and_then(|g| u32::try_from(g).ok())
                    .and_then(NonZeroU32::new);
                if goal.is_none() {
                    report("goal_per_day", describe(raw), "none".into());
                }
                goal
            }
        };

        let last_completed_day = match &self.last_completed_day {
            Value::Null => None,
            raw => {
                let day = parse_text::<DayKey>(raw);
                if day.is_none() {
                    report("last_completed_day", describe(raw), "none".into());
                }
                day
            }
        };

        let mut streak = counter_u32(&self.streak, "streak", &report);
        let mut completions_today =
            counter_u32(&self.completions_today, "completions_today", &report);
        let mut total_completions = match integer(&self.total_completions).map(u64::try_from) {
            Some(Ok(total)) => total,
            _ => {
                report("total_completions", describe(&self.total_completions), "0".into());
                0
            }
        };

        if last_completed_day.is_none() {
            if streak != 0 {
                report("streak", streak.to_string(), "0".into());
                streak = 0;
            }
            if completions_today != 0 {
                report("completions_today", completions_today.to_string(), "0".into());
                completions_today = 0;
            }
        } else if streak == 0 {
            report("streak", "0".into(), "1".into());
            streak = 1;
        }

        let floor = u64::from(streak.max(completions_today));
        if total_completions < floor {
            report(
                "total_completions",
                total_completions.to_string(),
                floor.to_string(),
            );
            total_completions = floor;
        }

        let created_at = parse_text::<Timestamp>(&self.created_at).unwrap_or_else(|| {
            report(
                "created_at",
                describe(&self.created_at),
                Timestamp::UNIX_EPOCH.to_string(),
            );
            Timestamp::UNIX_EPOCH
        });

        Habit {
            id,
            name,
            goal_per_day,
            streak,
            last_completed_day,
            completions_today,
            total_completions,
            created_at,
        }
    }
}

/// The value if SQLite stored it as an integer.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        _ => None,
    }
}

fn parse_text<T: FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::Text(text) => text.parse().ok(),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(text) => format!("'{text}'"),
        Value::Blob(bytes) => format!("<{} byte blob>", bytes.len()),
    }
}

fn counter_u32(
    raw: &Value,
    field: &'static str,
    report: &impl Fn(&'static str, String, String),
) -> u32 {
    let healed = match integer(raw) {
        Some(value) => match u32::try_from(value) {
            Ok(value) => return value,
            Err(_) if value < 0 => 0,
            Err(_) => u32::MAX,
        },
        None => 0,
    };
    report(field, describe(raw), healed.to_string());
    healed
}
