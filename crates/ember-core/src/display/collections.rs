//! Collection wrapper types for displaying groups of habits.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::{calendar::DayKey, models::Habit, projection::HabitView};

/// Every habit as it looks on one day, in list order.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use ember_core::{calendar::DayKey, display::HabitBoard, models::Habit};
/// use jiff::Timestamp;
///
/// let today: DayKey = "2024-03-01".parse().unwrap();
/// let habit = Habit::new(1, "Stretch".to_string(), None, Timestamp::now());
///
/// let board = HabitBoard::new(vec![habit], today);
/// let output = format!("{}", board);
/// assert!(output.contains("Stretch"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct HabitBoard(pub Vec<HabitView>);

impl HabitBoard {
    /// Projects each habit onto `today`.
    pub fn new(habits: Vec<Habit>, today: DayKey) -> Self {
        Self(
            habits
                .into_iter()
                .map(|habit| HabitView::new(habit, today))
                .collect(),
        )
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of habits on the board.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the habit view at the given index.
    pub fn get(&self, index: usize) -> Option<&HabitView> {
        self.0.get(index)
    }

    /// Get an iterator over the habit views.
    pub fn iter(&self) -> std::slice::Iter<'_, HabitView> {
        self.0.iter()
    }

    /// Habits whose goal is met today.
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|view| view.goal_met).count()
    }
}

impl Index<usize> for HabitBoard {
    type Output = HabitView;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for HabitBoard {
    type Item = HabitView;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HabitBoard {
    type Item = &'a HabitView;
    type IntoIter = std::slice::Iter<'a, HabitView>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for HabitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits found.");
        }

        writeln!(
            f,
            "# Habits ({} of {} done today)",
            self.completed_count(),
            self.0.len()
        )?;
        writeln!(f)?;
        for view in &self.0 {
            write!(f, "{view}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use jiff::Timestamp;

    use super::*;

    fn today() -> DayKey {
        DayKey::new(2024, 3, 1).unwrap()
    }

    fn habit(id: u64, name: &str, completed_today: bool) -> Habit {
        let mut habit = Habit::new(
            id,
            name.to_string(),
            NonZeroU32::new(1),
            Timestamp::from_second(1704067200).unwrap(), // 2024-01-01 00:00:00 UTC
        );
        if completed_today {
            habit.streak = 1;
            habit.completions_today = 1;
            habit.total_completions = 1;
            habit.last_completed_day = Some(today());
        }
        habit
    }

    #[test]
    fn test_empty_board() {
        let board = HabitBoard::new(vec![], today());
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.to_string(), "No habits found.\n");
    }

    #[test]
    fn test_board_lists_habits_in_order() {
        let board = HabitBoard::new(
            vec![habit(1, "Read", true), habit(2, "Run", false)],
            today(),
        );
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].habit.name, "Read");
        assert_eq!(board.completed_count(), 1);

        let output = board.to_string();
        assert!(output.starts_with("# Habits (1 of 2 done today)"));
        let read = output.find("1. Read").unwrap();
        let run = output.find("2. Run").unwrap();
        assert!(read < run);
    }

    #[test]
    fn test_board_serializes_as_array() {
        let board = HabitBoard::new(vec![habit(1, "Read", true)], today());
        let json = serde_json::to_value(&board).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Read");
        assert_eq!(items[0]["goal_met"], true);
        assert_eq!(items[0]["tier"], "cold");
    }
}
