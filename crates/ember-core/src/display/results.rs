//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! complete and delete operations with consistent messaging and resource
//! display.

use std::fmt;

use serde::Serialize;

use super::models::days;
use crate::{
    calendar::DayKey,
    engine::{Completion, StreakChange},
    models::Habit,
    projection::HabitView,
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use ember_core::{calendar::DayKey, display::CreateResult, models::Habit, projection::HabitView};
/// use jiff::Timestamp;
///
/// let habit = Habit::new(1, "Meditate".to_string(), None, Timestamp::now());
/// let today: DayKey = "2024-03-01".parse().unwrap();
///
/// let result = CreateResult::new(HabitView::new(habit, today));
/// assert!(result.to_string().contains("Created habit with ID: 1"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<HabitView> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created habit with ID: {}", self.resource.habit.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted habit {}", self.resource)
    }
}

/// Outcome of one recorded completion.
///
/// Keeps the streak transition next to the habit as it now looks, so the
/// message ("streak extended to 4 days") and the card agree.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionResult {
    #[serde(skip)]
    pub completion: Completion,
    pub previous_streak: u32,
    pub streak_change: StreakChange,
    pub habit: HabitView,
}

impl CompletionResult {
    pub fn new(completion: Completion, today: DayKey) -> Self {
        Self {
            previous_streak: completion.before.streak,
            streak_change: completion.streak_change(),
            habit: HabitView::new(completion.after.clone(), today),
            completion,
        }
    }

    /// Whether this completion is the one that reached today's goal.
    pub fn reached_goal(&self) -> bool {
        self.habit.goal_met && self.habit.completions_on_day == self.habit.goal
    }

    fn headline(&self) -> String {
        let streak = self.habit.habit.streak;
        match self.streak_change {
            StreakChange::Started => "Started a new streak: 1 day".to_string(),
            StreakChange::Extended => {
                format!("Streak extended to {streak} {}", days(streak))
            }
            StreakChange::Unchanged => {
                format!("Streak holds at {streak} {}", days(streak))
            }
            StreakChange::Restarted => format!(
                "Streak restarted after {} {}: now 1 day",
                self.previous_streak,
                days(self.previous_streak)
            ),
        }
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed {} ({} today)",
            self.completion.after, self.habit.completions_on_day
        )?;
        writeln!(f, "{}", self.headline())?;
        if self.reached_goal() && self.habit.habit.goal_per_day.is_some() {
            writeln!(f, "Daily goal reached!")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.habit)
    }
}
