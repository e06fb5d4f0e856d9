//! Habit handler operations that return formatted wrapper types for the
//! Tracker.

use super::Tracker;
use crate::{
    display::{CompletionResult, CreateResult, DeleteResult, HabitBoard},
    error::{Result, TrackerError},
    models::Habit,
    params::{CompleteHabit, CreateHabit, DeleteHabit, Id},
    projection::HabitView,
};

impl Tracker {
    /// Handle listing habits as they look today.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use ember_core::TrackerBuilder;
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let board = tracker.habit_board().await?;
    /// println!("{board}");
    /// # Result::<(), ember_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn habit_board(&self) -> Result<HabitBoard> {
        let habits = self.list_habits().await?;
        Ok(HabitBoard::new(habits, self.today()))
    }

    /// Handle showing a single habit as it looks today.
    ///
    /// Returns `None` if the habit doesn't exist.
    pub async fn show_habit(&self, params: &Id) -> Result<Option<HabitView>> {
        let today = self.today();
        Ok(self
            .get_habit(params)
            .await?
            .map(|habit| HabitView::new(habit, today)))
    }

    /// Handle creating a new habit, returning the created habit for
    /// confirmation.
    pub async fn create_habit_result(&self, params: &CreateHabit) -> Result<CreateResult<HabitView>> {
        let habit = self.create_habit(params).await?;
        Ok(CreateResult::new(HabitView::new(habit, self.today())))
    }

    /// Handle recording a completion, returning the before/after summary.
    pub async fn complete_habit_result(&self, params: &CompleteHabit) -> Result<CompletionResult> {
        let completion = self.complete_habit(params).await?;
        // The day the engine recorded, even if midnight passed meanwhile
        let today = completion
            .after
            .last_completed_day
            .unwrap_or_else(|| self.today());
        Ok(CompletionResult::new(completion, today))
    }

    /// Handle permanently deleting a habit with confirmation.
    ///
    /// Uses get-before-delete to return the deleted habit's details.
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` field is false
    /// Returns `TrackerError::HabitNotFound` if the habit does not exist
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use ember_core::{params::DeleteHabit, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = DeleteHabit { id: 1, confirmed: true };
    /// let deleted = tracker.delete_habit(&params).await?;
    /// # Result::<(), ember_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn delete_habit(&self, params: &DeleteHabit) -> Result<DeleteResult<Habit>> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input("confirmed").with_reason(
                "Habit deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let habit = self
            .get_habit(&id_params)
            .await?
            .ok_or(TrackerError::HabitNotFound { id: params.id })?;

        self.delete_habit_by_id(&id_params).await?;

        Ok(DeleteResult::new(habit))
    }
}
