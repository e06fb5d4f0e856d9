//! The habit store interface.
//!
//! The completion engine never talks to storage. Its caller goes through a
//! [`HabitStore`] to read a consistent habit, and writes the engine's answer
//! back with [`HabitStore::update`]. [`crate::Database`] is the SQLite
//! implementation; change notification is layered on top by
//! [`crate::Tracker::subscribe`].

use crate::{
    error::Result,
    models::{Habit, NewHabit, UpdateHabitRequest},
};

/// Key-value style access to persisted habits, keyed by habit id.
pub trait HabitStore {
    /// Stores a new habit with zeroed counters and returns it.
    fn create(&mut self, habit: &NewHabit) -> Result<Habit>;

    /// Applies a partial update. Fields not set in `request` keep their
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if no habit has this id.
    fn update(&mut self, id: u64, request: &UpdateHabitRequest) -> Result<Habit>;

    /// Permanently removes a habit.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if no habit has this id.
    fn delete(&mut self, id: u64) -> Result<()>;

    /// Reads one habit, `None` if it does not exist.
    fn get(&self, id: u64) -> Result<Option<Habit>>;

    /// Point-in-time read of every habit, oldest first.
    fn list(&self) -> Result<Vec<Habit>>;
}
