#[cfg(test)]
mod model_tests {
    use std::num::NonZeroU32;

    use jiff::Timestamp;
    use rusqlite::types::Value;

    use crate::{
        calendar::DayKey,
        models::{Habit, HabitRecord, UpdateHabitRequest},
    };

    fn created() -> Timestamp {
        Timestamp::from_second(1704067200).unwrap() // 2024-01-01 00:00:00 UTC
    }

    fn healthy_record() -> HabitRecord {
        HabitRecord {
            id: 42,
            name: Value::Text("Read".to_string()),
            goal_per_day: Value::Integer(3),
            streak: Value::Integer(4),
            last_completed_day: Value::Text("2024-01-04".to_string()),
            completions_today: Value::Integer(2),
            total_completions: Value::Integer(11),
            created_at: Value::Text(created().to_string()),
        }
    }

    #[test]
    fn test_new_habit_starts_zeroed() {
        let habit = Habit::new(1, "Stretch".to_string(), NonZeroU32::new(2), created());
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.completions_today, 0);
        assert_eq!(habit.total_completions, 0);
        assert_eq!(habit.last_completed_day, None);
        assert_eq!(habit.goal_per_day, NonZeroU32::new(2));
    }

    #[test]
    fn test_healthy_record_is_unchanged() {
        let habit = healthy_record().into_habit();
        assert_eq!(habit.goal_per_day, NonZeroU32::new(3));
        assert_eq!(habit.streak, 4);
        assert_eq!(habit.last_completed_day, Some("2024-01-04".parse().unwrap()));
        assert_eq!(habit.completions_today, 2);
        assert_eq!(habit.total_completions, 11);
        assert_eq!(habit.created_at, created());
    }

    #[test]
    fn test_negative_counters_clamp_to_zero() {
        let habit = HabitRecord {
            streak: Value::Integer(-3),
            completions_today: Value::Integer(-1),
            total_completions: Value::Integer(-9),
            last_completed_day: Value::Null,
            ..healthy_record()
        }
        .into_habit();

        assert_eq!(habit.streak, 0);
        assert_eq!(habit.completions_today, 0);
        assert_eq!(habit.total_completions, 0);
    }

    #[test]
    fn test_non_positive_goal_becomes_unbounded() {
        for raw in [0, -5] {
            let habit = HabitRecord {
                goal_per_day: Value::Integer(raw),
                ..healthy_record()
            }
            .into_habit();
            assert_eq!(habit.goal_per_day, None, "goal {raw} was kept");
        }
    }

    #[test]
    fn test_unparsable_day_clears_completion_state() {
        let habit = HabitRecord {
            last_completed_day: Value::Text("yesterday".to_string()),
            ..healthy_record()
        }
        .into_habit();

        assert_eq!(habit.last_completed_day, None);
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.completions_today, 0);
        // Lifetime totals are never lowered by repair.
        assert_eq!(habit.total_completions, 11);
    }

    #[test]
    fn test_completed_habit_has_streak_of_at_least_one() {
        let habit = HabitRecord {
            streak: Value::Integer(0),
            ..healthy_record()
        }
        .into_habit();
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn test_total_is_raised_to_cover_streak_and_today() {
        let habit = HabitRecord {
            streak: Value::Integer(6),
            completions_today: Value::Integer(2),
            total_completions: Value::Integer(3),
            ..healthy_record()
        }
        .into_habit();
        assert_eq!(habit.total_completions, 6);
    }

    #[test]
    fn test_mistyped_columns_are_repaired() {
        let habit = HabitRecord {
            name: Value::Null,
            goal_per_day: Value::Text("eight".to_string()),
            streak: Value::Real(2.5),
            completions_today: Value::Blob(vec![1, 2]),
            created_at: Value::Text("garbage".to_string()),
            ..healthy_record()
        }
        .into_habit();

        assert_eq!(habit.name, "Habit 42");
        assert_eq!(habit.goal_per_day, None);
        // The day is still valid, so the streak is raised to one.
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.completions_today, 0);
        assert_eq!(habit.total_completions, 11);
        assert_eq!(habit.created_at, Timestamp::UNIX_EPOCH);
    }

    #[test]
    fn test_oversized_counter_saturates() {
        let habit = HabitRecord {
            completions_today: Value::Integer(i64::from(u32::MAX) + 10),
            total_completions: Value::Integer(1),
            ..healthy_record()
        }
        .into_habit();

        assert_eq!(habit.completions_today, u32::MAX);
        assert_eq!(habit.total_completions, u64::from(u32::MAX));
    }

    #[test]
    fn test_habit_serializes_day_key_as_string() {
        let mut habit = Habit::new(5, "Walk".to_string(), None, created());
        habit.last_completed_day = Some(DayKey::new(2024, 1, 2).unwrap());

        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["last_completed_day"], "2024-01-02");
        assert_eq!(json["goal_per_day"], serde_json::Value::Null);
    }

    #[test]
    fn test_update_request_emptiness() {
        assert!(UpdateHabitRequest::default().is_empty());
        let request = UpdateHabitRequest {
            completions_today: Some(0),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }
}
