//! Parameter structures for Ember operations
//!
//! This module contains shared parameter structures that front ends (the CLI
//! today) fill in from user input and hand to the [`crate::Tracker`]. They
//! carry no framework-specific derives, so each interface wraps them in its
//! own argument types and converts with `From`.
//!
//! ## Validation
//!
//! User input is checked here, before anything reaches the store or the
//! completion engine. [`CreateHabit::validate`] rejects an empty name and a
//! goal that is not a positive whole number; nothing is written when
//! validation fails.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   NewHabit      │
//! │  (clap derives) │───▶│  (raw input)    │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::NewHabit,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the habit to operate on
    pub id: u64,
}

/// Parameters for creating a new habit.
///
/// Holds the user's input as typed, so that a goal like "eight" can be
/// reported back instead of being silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHabit {
    /// Name of the habit (required, surrounding whitespace is ignored)
    pub name: String,
    /// Optional daily goal as entered; blank means no goal
    pub goal_per_day: Option<String>,
}

impl CreateHabit {
    /// Validate the input and produce the habit to store.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the name is empty after trimming
    /// * `TrackerError::InvalidInput` - When the goal is not a positive whole
    ///   number
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ember_core::params::CreateHabit;
    ///
    /// let params = CreateHabit {
    ///     name: "  Drink water ".to_string(),
    ///     goal_per_day: Some("8".to_string()),
    /// };
    /// let habit = params.validate()?;
    /// assert_eq!(habit.name, "Drink water");
    /// assert_eq!(habit.goal_per_day.map(|g| g.get()), Some(8));
    ///
    /// let params = CreateHabit {
    ///     name: "   ".to_string(),
    ///     goal_per_day: None,
    /// };
    /// assert!(params.validate().is_err());
    /// # Ok::<(), ember_core::TrackerError>(())
    /// ```
    pub fn validate(&self) -> Result<NewHabit> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Please enter a habit name."));
        }

        let goal_per_day = match &self.goal_per_day {
            Some(raw) => parse_goal(raw)?,
            None => None,
        };

        Ok(NewHabit {
            name: name.to_string(),
            goal_per_day,
        })
    }
}

/// Parse a daily goal typed by the user.
///
/// Blank input means "no goal". Anything else must be a whole number of at
/// least 1.
pub fn parse_goal(input: &str) -> Result<Option<NonZeroU32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = |reason: &str| TrackerError::invalid_input("goal_per_day").with_reason(reason);

    let value: i64 = trimmed
        .parse()
        .map_err(|_| invalid(&format!("'{trimmed}' is not a whole number")))?;
    if value < 1 {
        return Err(invalid("Daily goal must be at least 1"));
    }
    let goal = u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| invalid("Daily goal is too large"))?;
    Ok(Some(goal))
}

/// Parameters for recording a completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteHabit {
    /// ID of the habit that was done
    pub id: u64,
    /// Record the completion even if the daily goal is already met
    #[serde(default)]
    pub force: bool,
}

/// Parameters for permanently deleting a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteHabit {
    /// ID of the habit to delete
    pub id: u64,
    /// Confirmation flag - must be true to proceed with deletion
    #[serde(default)]
    pub confirmed: bool,
}
