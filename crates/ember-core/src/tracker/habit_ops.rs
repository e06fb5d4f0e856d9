//! Habit operations for the Tracker.

use super::{HabitChange, Tracker};
use crate::{
    engine::Completion,
    error::Result,
    models::Habit,
    params::{CompleteHabit, CreateHabit, Id},
    store::HabitStore,
};

impl Tracker {
    /// Validates the input and stores a new habit with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for an empty name or a goal that
    /// is not a positive whole number. Nothing is written in that case.
    pub async fn create_habit(&self, params: &CreateHabit) -> Result<Habit> {
        let new_habit = params.validate()?;

        let habit = self
            .with_database(move |db| db.create(&new_habit))
            .await?;

        self.notify(HabitChange::Created { id: habit.id });
        Ok(habit)
    }

    /// Retrieves a habit by its ID.
    pub async fn get_habit(&self, params: &Id) -> Result<Option<Habit>> {
        let habit_id = params.id;
        self.with_database(move |db| db.get(habit_id)).await
    }

    /// Lists every habit, oldest first.
    pub async fn list_habits(&self) -> Result<Vec<Habit>> {
        self.with_database(|db| db.list()).await
    }

    /// Records one completion of a habit for today.
    ///
    /// The read, the engine step and the write happen in one SQLite
    /// transaction. Unless `force` is set, a habit whose effective daily goal
    /// (its goal, or one when it has none) is already met today is refused
    /// with `TrackerError::GoalAlreadyMet`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if the habit no longer exists
    /// Returns `TrackerError::StoreUnavailable` if the database is busy
    pub async fn complete_habit(&self, params: &CompleteHabit) -> Result<Completion> {
        let habit_id = params.id;
        let stop_at_goal = !params.force;
        let today = self.today();

        let completion = self
            .with_database(move |db| db.complete_habit(habit_id, today, stop_at_goal))
            .await?;

        self.notify(HabitChange::Updated { id: habit_id });
        Ok(completion)
    }

    /// Permanently deletes a habit. This operation cannot be undone.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if the habit does not exist
    pub async fn delete_habit_by_id(&self, params: &Id) -> Result<()> {
        let habit_id = params.id;

        self.with_database(move |db| db.delete(habit_id)).await?;

        self.notify(HabitChange::Deleted { id: habit_id });
        Ok(())
    }

    /// Zeroes daily counters left over from earlier days.
    ///
    /// This only tidies what is stored; reads already treat such counters
    /// as zero. Returns how many habits were reset.
    pub async fn sweep_stale_counters(&self) -> Result<usize> {
        let today = self.today();

        let count = self
            .with_database(move |db| db.sweep_stale_counters(today))
            .await?;

        if count > 0 {
            self.notify(HabitChange::CountersReset { count });
        }
        Ok(count)
    }
}
