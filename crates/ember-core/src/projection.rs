//! Display-only values derived from a habit.
//!
//! Nothing here is written back to the store. A [`HabitView`] pins a habit to
//! a particular day so that the daily counter, the progress bar and the
//! goal-met flag all agree with the read-time reset in [`crate::engine`].

use serde::Serialize;

use crate::{
    calendar::DayKey,
    engine::{completions_on, effective_goal, is_goal_met},
    models::Habit,
};

/// How hot a streak is burning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakTier {
    /// Fewer than 2 days
    Cold,
    /// 2 to 4 days
    Warm,
    /// 5 to 9 days
    Hot,
    /// 10 days or more
    Blazing,
}

impl StreakTier {
    /// Ordinal of the tier, 0 for [`StreakTier::Cold`] up to 3.
    pub fn level(&self) -> u8 {
        match self {
            StreakTier::Cold => 0,
            StreakTier::Warm => 1,
            StreakTier::Hot => 2,
            StreakTier::Blazing => 3,
        }
    }

    /// One flame per tier level.
    ///
    /// ```rust
    /// use ember_core::projection::StreakTier;
    ///
    /// assert_eq!(StreakTier::Cold.flames(), "");
    /// assert_eq!(StreakTier::Hot.flames(), "🔥🔥");
    /// ```
    pub fn flames(&self) -> &'static str {
        match self {
            StreakTier::Cold => "",
            StreakTier::Warm => "🔥",
            StreakTier::Hot => "🔥🔥",
            StreakTier::Blazing => "🔥🔥🔥",
        }
    }
}

/// Tier for a streak length. Lower bounds are inclusive and the highest
/// matching tier wins.
pub fn streak_tier(streak: u32) -> StreakTier {
    match streak {
        10.. => StreakTier::Blazing,
        5..=9 => StreakTier::Hot,
        2..=4 => StreakTier::Warm,
        _ => StreakTier::Cold,
    }
}

/// Share of today's goal reached, capped at 1.0.
pub fn progress_fraction(habit: &Habit, today: DayKey) -> f64 {
    let done = f64::from(completions_on(habit, today));
    let goal = f64::from(effective_goal(habit));
    (done / goal).min(1.0)
}

/// A habit as it should be shown on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitView {
    #[serde(flatten)]
    pub habit: Habit,
    /// The day this view was computed for
    pub today: DayKey,
    /// Completions on `today`, after the read-time reset
    pub completions_on_day: u32,
    /// Completions needed for `today` to count as done
    pub goal: u32,
    /// Share of the goal reached, in `[0, 1]`
    pub progress: f64,
    pub goal_met: bool,
    pub tier: StreakTier,
}

impl HabitView {
    pub fn new(habit: Habit, today: DayKey) -> Self {
        Self {
            completions_on_day: completions_on(&habit, today),
            goal: effective_goal(&habit),
            progress: progress_fraction(&habit, today),
            goal_met: is_goal_met(&habit, today),
            tier: streak_tier(habit.streak),
            today,
            habit,
        }
    }

    /// Progress as a whole percentage, 0 to 100.
    pub fn percent(&self) -> u8 {
        // progress is clamped to [0, 1], so the cast cannot overflow
        (self.progress * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use jiff::Timestamp;

    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn habit(goal: Option<u32>, last: Option<&str>, today_count: u32) -> Habit {
        Habit {
            goal_per_day: goal.and_then(NonZeroU32::new),
            last_completed_day: last.map(day),
            completions_today: today_count,
            streak: u32::from(last.is_some()),
            total_completions: u64::from(today_count),
            ..Habit::new(3, "Push-ups".to_string(), None, Timestamp::UNIX_EPOCH)
        }
    }

    #[test]
    fn test_streak_tier_thresholds() {
        let expected = [
            (0, StreakTier::Cold),
            (1, StreakTier::Cold),
            (2, StreakTier::Warm),
            (4, StreakTier::Warm),
            (5, StreakTier::Hot),
            (9, StreakTier::Hot),
            (10, StreakTier::Blazing),
            (365, StreakTier::Blazing),
        ];
        for (streak, tier) in expected {
            assert_eq!(streak_tier(streak), tier, "streak {streak}");
        }
        assert_eq!(streak_tier(10).level(), 3);
        assert_eq!(streak_tier(10).flames(), "🔥🔥🔥");
    }

    #[test]
    fn test_progress_fraction_partial() {
        let h = habit(Some(8), Some("2024-01-02"), 2);
        assert_eq!(progress_fraction(&h, day("2024-01-02")), 0.25);
    }

    #[test]
    fn test_progress_fraction_is_capped_past_goal() {
        let h = habit(Some(3), Some("2024-01-02"), 7);
        assert_eq!(progress_fraction(&h, day("2024-01-02")), 1.0);
    }

    #[test]
    fn test_progress_fraction_without_goal_is_binary() {
        let today = day("2024-01-02");
        assert_eq!(progress_fraction(&habit(None, None, 0), today), 0.0);
        assert_eq!(progress_fraction(&habit(None, Some("2024-01-02"), 1), today), 1.0);
        assert_eq!(progress_fraction(&habit(None, Some("2024-01-02"), 4), today), 1.0);
    }

    #[test]
    fn test_progress_ignores_stale_counter() {
        let h = habit(Some(4), Some("2024-01-01"), 4);
        assert_eq!(progress_fraction(&h, day("2024-01-02")), 0.0);
    }

    #[test]
    fn test_view_combines_projection() {
        let view = HabitView::new(habit(Some(4), Some("2024-01-02"), 3), day("2024-01-02"));
        assert_eq!(view.completions_on_day, 3);
        assert_eq!(view.goal, 4);
        assert_eq!(view.percent(), 75);
        assert!(!view.goal_met);
        assert_eq!(view.tier, StreakTier::Cold);
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = HabitView::new(habit(None, Some("2024-01-02"), 1), day("2024-01-02"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Push-ups");
        assert_eq!(json["goal_met"], true);
        assert_eq!(json["tier"], "cold");
        assert_eq!(json["today"], "2024-01-02");
    }
}
