//! Display implementations for domain models.
//!
//! A habit is always shown through a [`HabitView`], which has already been
//! pinned to a day, so the "today" numbers on screen match what the
//! completion engine would use.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::Habit,
    projection::{HabitView, StreakTier},
};

const PROGRESS_BAR_WIDTH: usize = 10;

impl fmt::Display for StreakTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StreakTier::Cold => "cold",
            StreakTier::Warm => "warm",
            StreakTier::Hot => "hot",
            StreakTier::Blazing => "blazing",
        };
        f.write_str(name)
    }
}

impl HabitView {
    /// Text progress bar such as `[######----] 60%`.
    pub fn progress_bar(&self) -> String {
        let filled = (self.progress * PROGRESS_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(PROGRESS_BAR_WIDTH);
        format!(
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled),
            self.percent()
        )
    }

    fn status_line(&self) -> &'static str {
        match (self.goal_met, self.habit.goal_per_day.is_some()) {
            (true, true) => "✓ Goal reached today",
            (true, false) => "✓ Done today",
            (false, _) => "○ Not done yet today",
        }
    }
}

impl fmt::Display for HabitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let habit = &self.habit;
        let flames = self.tier.flames();
        if flames.is_empty() {
            writeln!(f, "## {}. {}", habit.id, habit.name)?;
        } else {
            writeln!(f, "## {}. {} {flames}", habit.id, habit.name)?;
        }
        writeln!(f)?;

        if let Some(goal) = habit.goal_per_day {
            writeln!(
                f,
                "- Daily Goal: {goal} | Today: {}",
                self.completions_on_day
            )?;
            writeln!(f, "- Progress: {}", self.progress_bar())?;
        }

        writeln!(f, "- Status: {}", self.status_line())?;
        writeln!(f, "- Streak: {} {}", habit.streak, days(habit.streak))?;
        writeln!(f, "- Total completions: {}", habit.total_completions)?;
        if let Some(last) = habit.last_completed_day {
            writeln!(f, "- Last completed: {last}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&habit.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Habit {
    /// One-line identification, used in confirmations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' (ID: {})", self.name, self.id)
    }
}

pub(crate) fn days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}
