//! High-level tracker API for managing habits.
//!
//! This module provides the main [`Tracker`] interface. The tracker is the
//! caller the completion engine expects: it reads a consistent habit from
//! the store, asks [`crate::engine`] for the next state, writes it back, and
//! tells subscribers that something changed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (habit_handlers)│───▶│  (habit_ops)    │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Display wrappers     Store + engine         Data persistence
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  subscription   │
//!                        │ (change feed)   │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`habit_ops`]: Store operations returning plain models
//! - [`habit_handlers`]: Operations returning display wrappers
//! - [`subscription`]: Live snapshots of the habit collection
//!
//! Every SQLite call runs on the blocking thread pool, so the async API is
//! safe to use from any Tokio task.
//!
//! # Usage
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
//!         name: "Drink water".to_string(),
//!         goal_per_day: Some("8".to_string()),
//!     })
//!     .await?;
//!
//! let completion = tracker
//!     .complete_habit(&CompleteHabit { id: habit.id, force: false })
//!     .await?;
//! println!("Streak is now {}", completion.after.streak);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use log::debug;
use tokio::{sync::broadcast, task};

use crate::{
    calendar::{today_key, Clock, DayKey},
    db::Database,
    error::{Result, TrackerError},
};

// Module declarations
pub mod builder;
pub mod habit_handlers;
pub mod habit_ops;
pub mod subscription;


// Re-export the main types
pub use builder::TrackerBuilder;
pub use subscription::{HabitChange, Subscription};

/// Main tracker interface for managing habits.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) changes: broadcast::Sender<HabitChange>,
    pub(crate) poll_interval: Duration,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>, poll_interval: Duration) -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            db_path,
            clock,
            changes,
            poll_interval,
        }
    }

    /// The local calendar day according to the tracker's clock.
    pub fn today(&self) -> DayKey {
        today_key(self.clock.as_ref())
    }

    /// The clock the tracker reads "today" from.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Path of the SQLite database backing this tracker.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }

    /// Tells subscribers the habit collection changed.
    pub(crate) fn notify(&self, change: HabitChange) {
        debug!("Habit change: {change:?}");
        // No subscribers is not an error
        let _ = self.changes.send(change);
    }
}
