//! Data models for habits.
//!
//! This module contains the domain model for a tracked habit and the request
//! types used to create and change it. Display implementations live in
//! [`crate::display`], and the rules that move a habit from one state to the
//! next live in [`crate::engine`].
//!
//! # Invariants
//!
//! A [`Habit`] read from the store always satisfies:
//!
//! - `name` is trimmed and non-empty
//! - `goal_per_day`, when present, is at least 1
//! - `streak` is 0 exactly when `last_completed_day` is `None`
//! - `completions_today` is 0 when `last_completed_day` is `None`
//! - `total_completions` is at least `streak` and at least
//!   `completions_today`
//!
//! Rows that break these rules are repaired by [`HabitRecord::into_habit`]
//! and a warning is logged.
//!
//! # Examples
//!
//! ```rust
//! use ember_core::models::Habit;
//! use jiff::Timestamp;
//!
//! let habit = Habit::new(1, "Drink water".to_string(), None, Timestamp::now());
//! assert_eq!(habit.streak, 0);
//! assert!(habit.last_completed_day.is_none());
//! ```

pub mod habit;
pub mod requests;

#[cfg(test)]
mod tests;

pub use habit::{Habit, HabitRecord};
pub use requests::{NewHabit, UpdateHabitRequest};
