//! Request types for creating and updating habits.

use std::num::NonZeroU32;

use crate::calendar::DayKey;

/// A validated habit, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub goal_per_day: Option<NonZeroU32>,
}

/// Partial update of a stored habit. Fields left as `None` keep their
/// current value.
///
/// The nested options on `goal_per_day` and `last_completed_day`
/// distinguish "leave unchanged" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub goal_per_day: Option<Option<NonZeroU32>>,
    pub streak: Option<u32>,
    pub last_completed_day: Option<Option<DayKey>>,
    pub completions_today: Option<u32>,
    pub total_completions: Option<u64>,
}

impl UpdateHabitRequest {
    /// Whether the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.goal_per_day.is_none()
            && self.streak.is_none()
            && self.last_completed_day.is_none()
            && self.completions_today.is_none()
            && self.total_completions.is_none()
    }
}
