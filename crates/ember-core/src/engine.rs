//! Completion engine: how a "complete" event changes a habit.
//!
//! Everything here is a pure function of the current habit and the caller's
//! idea of today. The engine never refuses a completion and never touches the
//! store; the caller reads the habit, asks the engine for the next state and
//! writes it back in one transaction.
//!
//! # Daily reset
//!
//! `completions_today` belongs to `last_completed_day`. On any other day the
//! logical count is 0, whatever the stored field says, so no write is needed
//! when the calendar rolls over. [`completions_on`] is the only correct way
//! to read the counter; [`is_counter_stale`] lets an optional sweep zero the
//! stored value for display purposes.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::{
    calendar::{day_delta, DayKey},
    models::Habit,
};

/// Completions needed for the day to count as done. Habits without an
/// explicit goal are done after one completion.
pub fn effective_goal(habit: &Habit) -> u32 {
    habit.goal_per_day.map_or(1, NonZeroU32::get)
}

/// Completions recorded on `today`, treating a counter left over from an
/// earlier day as zero.
pub fn completions_on(habit: &Habit, today: DayKey) -> u32 {
    if habit.last_completed_day == Some(today) {
        habit.completions_today
    } else {
        0
    }
}

/// Whether the habit has reached its goal for `today`.
pub fn is_goal_met(habit: &Habit, today: DayKey) -> bool {
    completions_on(habit, today) >= effective_goal(habit)
}

/// Whether the stored daily counter is left over from a previous day.
pub fn is_counter_stale(habit: &Habit, today: DayKey) -> bool {
    habit.completions_today != 0 && habit.last_completed_day != Some(today)
}

/// Records one completion of `habit` on `today` and returns the next state.
///
/// - The daily counter restarts from 0 unless the last completion was today.
/// - A repeat on the same day leaves the streak alone.
/// - A completion the day after the last one extends the streak; any other
///   gap, including a stored day that lies after `today`, restarts it at 1.
/// - The lifetime total always grows by exactly one.
pub fn record_completion(habit: &Habit, today: DayKey) -> Habit {
    let completions_today = completions_on(habit, today).saturating_add(1);

    let streak = match habit.last_completed_day {
        Some(last) if last == today => habit.streak,
        Some(last) if day_delta(last, today) == 1 => habit.streak.saturating_add(1),
        Some(_) | None => 1,
    };

    Habit {
        streak,
        completions_today,
        total_completions: habit.total_completions.saturating_add(1),
        last_completed_day: Some(today),
        ..habit.clone()
    }
}

/// What a completion did to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakChange {
    /// First completion ever
    Started,
    /// Completed the day after the previous completion
    Extended,
    /// Another completion on a day that was already counted
    Unchanged,
    /// A gap broke the previous streak
    Restarted,
}

/// A habit before and after one recorded completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub before: Habit,
    pub after: Habit,
}

impl Completion {
    /// Applies [`record_completion`] to `before`.
    pub fn record(before: Habit, today: DayKey) -> Self {
        let after = record_completion(&before, today);
        Self { before, after }
    }

    pub fn streak_change(&self) -> StreakChange {
        match self.before.last_completed_day {
            None => StreakChange::Started,
            Some(last) if Some(last) == self.after.last_completed_day => StreakChange::Unchanged,
            Some(_) if self.after.streak > self.before.streak => StreakChange::Extended,
            Some(_) => StreakChange::Restarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().expect("valid day key")
    }

    fn habit(goal: Option<u32>) -> Habit {
        Habit::new(
            1,
            "Drink water".to_string(),
            goal.and_then(NonZeroU32::new),
            Timestamp::from_second(1704067200).unwrap(),
        )
    }

    fn completed(streak: u32, last: &str, today_count: u32, total: u64) -> Habit {
        Habit {
            streak,
            last_completed_day: Some(day(last)),
            completions_today: today_count,
            total_completions: total,
            ..habit(None)
        }
    }

    #[test]
    fn test_first_completion_starts_everything_at_one() {
        let next = record_completion(&habit(None), day("2024-01-01"));

        assert_eq!(next.streak, 1);
        assert_eq!(next.completions_today, 1);
        assert_eq!(next.total_completions, 1);
        assert_eq!(next.last_completed_day, Some(day("2024-01-01")));
    }

    #[test]
    fn test_completion_day_after_extends_streak() {
        let next = record_completion(&completed(5, "2024-01-01", 1, 9), day("2024-01-02"));
        assert_eq!(next.streak, 6);
        assert_eq!(next.completions_today, 1);
        assert_eq!(next.total_completions, 10);
    }

    #[test]
    fn test_gap_of_several_days_restarts_streak() {
        let next = record_completion(&completed(5, "2024-01-01", 1, 9), day("2024-01-05"));
        assert_eq!(next.streak, 1);
        assert_eq!(next.last_completed_day, Some(day("2024-01-05")));
    }

    #[test]
    fn test_gap_of_exactly_two_days_restarts_streak() {
        let next = record_completion(&completed(3, "2024-01-01", 1, 3), day("2024-01-03"));
        assert_eq!(next.streak, 1);
    }

    #[test]
    fn test_repeat_on_same_day_keeps_streak() {
        let next = record_completion(&completed(3, "2024-01-02", 1, 7), day("2024-01-02"));
        assert_eq!(next.streak, 3);
        assert_eq!(next.completions_today, 2);
        assert_eq!(next.total_completions, 8);
    }

    #[test]
    fn test_n_completions_on_one_day() {
        let today = day("2024-01-10");
        let start = completed(4, "2024-01-09", 3, 20);

        let mut current = start.clone();
        for n in 1..=6 {
            current = record_completion(&current, today);
            assert_eq!(current.completions_today, n);
            assert_eq!(current.streak, 5);
            assert_eq!(current.total_completions, start.total_completions + u64::from(n));
        }
    }

    #[test]
    fn test_stale_counter_is_reset_before_increment() {
        // Stored counter of 7 from two days ago must not leak into today.
        let next = record_completion(&completed(2, "2024-01-01", 7, 15), day("2024-01-02"));
        assert_eq!(next.completions_today, 1);
        assert_eq!(next.streak, 3);
    }

    #[test]
    fn test_future_stored_day_restarts_streak() {
        let next = record_completion(&completed(8, "2024-01-09", 2, 30), day("2024-01-05"));
        assert_eq!(next.streak, 1);
        assert_eq!(next.completions_today, 1);
        assert_eq!(next.last_completed_day, Some(day("2024-01-05")));
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let next = record_completion(&completed(30, "2024-01-31", 1, 30), day("2024-02-01"));
        assert_eq!(next.streak, 31);
    }

    #[test]
    fn test_other_fields_are_untouched() {
        let before = Habit {
            goal_per_day: NonZeroU32::new(8),
            ..completed(1, "2024-01-01", 1, 1)
        };
        let next = record_completion(&before, day("2024-01-02"));
        assert_eq!(next.id, before.id);
        assert_eq!(next.name, before.name);
        assert_eq!(next.goal_per_day, before.goal_per_day);
        assert_eq!(next.created_at, before.created_at);
    }

    #[test]
    fn test_counter_is_read_relative_to_today() {
        let habit = completed(2, "2024-01-02", 4, 10);
        assert_eq!(completions_on(&habit, day("2024-01-02")), 4);
        assert_eq!(completions_on(&habit, day("2024-01-03")), 0);
        assert!(!is_counter_stale(&habit, day("2024-01-02")));
        assert!(is_counter_stale(&habit, day("2024-01-03")));
    }

    #[test]
    fn test_goal_met_uses_effective_goal() {
        let today = day("2024-01-02");
        let binary = completed(1, "2024-01-02", 1, 1);
        assert_eq!(effective_goal(&binary), 1);
        assert!(is_goal_met(&binary, today));
        assert!(!is_goal_met(&binary, day("2024-01-03")));

        let counted = Habit {
            goal_per_day: NonZeroU32::new(3),
            ..completed(1, "2024-01-02", 2, 2)
        };
        assert!(!is_goal_met(&counted, today));
        let counted = record_completion(&counted, today);
        assert!(is_goal_met(&counted, today));
        // The engine keeps counting past the goal.
        let counted = record_completion(&counted, today);
        assert_eq!(counted.completions_today, 4);
    }

    #[test]
    fn test_completion_reports_streak_change() {
        let today = day("2024-01-02");
        assert_eq!(
            Completion::record(habit(None), today).streak_change(),
            StreakChange::Started
        );
        assert_eq!(
            Completion::record(completed(2, "2024-01-01", 1, 2), today).streak_change(),
            StreakChange::Extended
        );
        assert_eq!(
            Completion::record(completed(2, "2024-01-02", 1, 2), today).streak_change(),
            StreakChange::Unchanged
        );
        assert_eq!(
            Completion::record(completed(2, "2023-12-25", 1, 2), today).streak_change(),
            StreakChange::Restarted
        );
        // A one-day streak broken by a gap stays at 1 but still restarted.
        assert_eq!(
            Completion::record(completed(1, "2023-12-25", 1, 1), today).streak_change(),
            StreakChange::Restarted
        );
    }

    #[test]
    fn test_never_completed_counter_is_not_stale() {
        assert!(!is_counter_stale(&habit(Some(3)), day("2024-01-01")));
    }

    #[test]
    fn test_streak_change_serializes_lowercase() {
        let names = [
            (StreakChange::Started, "\"started\""),
            (StreakChange::Extended, "\"extended\""),
            (StreakChange::Unchanged, "\"unchanged\""),
            (StreakChange::Restarted, "\"restarted\""),
        ];
        for (change, expected) in names {
            assert_eq!(serde_json::to_string(&change).unwrap(), expected);
        }
    }
}
