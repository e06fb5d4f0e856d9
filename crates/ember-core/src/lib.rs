//! Core library for the Ember habit tracker.
//!
//! A habit is something done up to a few times a day. Ember counts
//! completions per calendar day, keeps a streak of consecutive days, and
//! works out how far along today's goal is.
//!
//! # Layers
//!
//! - [`calendar`]: local calendar days and the clock that decides "today"
//! - [`engine`]: pure completion and streak rules
//! - [`projection`]: display values derived from a habit (tier, progress)
//! - [`store`] and [`db`]: persistence behind the [`HabitStore`] trait,
//!   backed by SQLite
//! - [`tracker`]: the async facade that ties the above together and feeds
//!   subscriptions
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ember_core::{params::{CompleteHabit, CreateHabit}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("habits.db"))
//!     .build()
//!     .await?;
//!
//! let habit = tracker
//!     .create_habit(&CreateHabit {
//!         name: "Read 20 pages".to_string(),
//!         goal_per_day: None,
//!     })
//!     .await?;
//!
//! let result = tracker
//!     .complete_habit_result(&CompleteHabit { id: habit.id, force: false })
//!     .await?;
//! println!("{result}");
//!
//! let board = tracker.habit_board().await?;
//! println!("{board}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod projection;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use calendar::{Clock, DayKey, ManualClock, SystemClock};
pub use db::Database;
pub use display::{
    CompletionResult, CreateResult, DeleteResult, HabitBoard, LocalDateTime, OperationStatus,
};
pub use engine::{Completion, StreakChange};
pub use error::{Result, TrackerError};
pub use models::{Habit, NewHabit, UpdateHabitRequest};
pub use params::{CompleteHabit, CreateHabit, DeleteHabit, Id};
pub use projection::{HabitView, StreakTier};
pub use store::HabitStore;
pub use tracker::{HabitChange, Subscription, Tracker, TrackerBuilder};
