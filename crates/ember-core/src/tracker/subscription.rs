//! Live snapshots of the habit collection.
//!
//! [`Tracker::subscribe`] hands back a [`Subscription`]. While it is alive a
//! background task delivers the full habit list to the callback: once right
//! away, then again after every change. Dropping the handle (or calling
//! [`Subscription::unsubscribe`]) stops the task, so a front end that owns
//! the handle cannot leak a listener past its own teardown.
//!
//! Two signals wake the task:
//!
//! - in-process notifications sent by the tracker after each mutation
//! - SQLite's `data_version`, polled every
//!   [`super::builder::DEFAULT_POLL_INTERVAL`] (configurable), which catches
//!   writes from other processes
//!
//! A snapshot is only read when `data_version` has moved, so one write
//! produces one callback no matter which signal arrives first.

use std::{path::PathBuf, time::Duration};

use log::{debug, warn};
use tokio::{
    runtime::Handle,
    sync::broadcast::{self, error::RecvError},
    task::{self, JoinHandle},
    time::{self, MissedTickBehavior},
};

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::Habit,
    store::HabitStore,
};

/// A change made through a [`Tracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitChange {
    Created { id: u64 },
    Updated { id: u64 },
    Deleted { id: u64 },
    /// The stale-counter sweep reset this many habits
    CountersReset { count: usize },
}

/// Handle to an active subscription. The callback stops firing once this is
/// dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    /// Stops delivering snapshots. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}

    /// Whether the background task is still running.
    ///
    /// A subscription ends on its own if the tracker is dropped or the
    /// database can no longer be opened.
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Subscription released");
    }
}

impl Tracker {
    /// Subscribes `callback` to the full habit collection.
    ///
    /// The callback runs on a Tokio worker with the current list of habits,
    /// first immediately and then after each change, until the returned
    /// [`Subscription`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Configuration` when called outside a Tokio
    /// runtime.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use ember_core::TrackerBuilder;
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let subscription = tracker.subscribe(|habits| {
    ///     println!("{} habits", habits.len());
    /// })?;
    /// // ... later, on teardown
    /// drop(subscription);
    /// # Result::<(), ember_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub fn subscribe<F>(&self, callback: F) -> Result<Subscription>
    where
        F: FnMut(Vec<Habit>) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| TrackerError::Configuration {
            message: format!("Subscriptions need a Tokio runtime: {e}"),
        })?;

        let changes = self.changes.subscribe();
        let handle = runtime.spawn(watch(
            self.db_path.clone(),
            changes,
            self.poll_interval,
            callback,
        ));
        debug!("Subscription started");

        Ok(Subscription { handle })
    }
}

/// Reads the habit list if the store changed since `last_version`.
fn read_if_changed(db: &Database, last_version: Option<i64>) -> Result<Option<(i64, Vec<Habit>)>> {
    // Read the version first: a commit racing with the list is then seen
    // again on the next wake-up rather than missed.
    let version = db.data_version()?;
    if last_version == Some(version) {
        return Ok(None);
    }
    Ok(Some((version, db.list()?)))
}

async fn watch<F>(
    db_path: PathBuf,
    mut changes: broadcast::Receiver<HabitChange>,
    poll_interval: Duration,
    mut callback: F,
) where
    F: FnMut(Vec<Habit>) + Send + 'static,
{
    let opened = task::spawn_blocking(move || Database::new(&db_path)).await;
    let mut db = match opened {
        Ok(Ok(db)) => db,
        Ok(Err(e)) => {
            warn!("Subscription could not open the habit store: {e}");
            return;
        }
        Err(e) => {
            warn!("Subscription task failed to start: {e}");
            return;
        }
    };

    let mut ticker = time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; the initial snapshot covers it.
    ticker.tick().await;

    let mut last_version = None;
    loop {
        let read = task::spawn_blocking(move || {
            let result = read_if_changed(&db, last_version);
            (db, result)
        })
        .await;

        let result = match read {
            Ok((returned, result)) => {
                db = returned;
                result
            }
            Err(e) => {
                warn!("Subscription read task failed: {e}");
                return;
            }
        };

        match result {
            Ok(Some((version, habits))) => {
                last_version = Some(version);
                callback(habits);
            }
            Ok(None) => {}
            // Keep last_version so the next wake-up retries the read
            Err(e) => warn!("Subscription failed to read habits: {e}"),
        }

        tokio::select! {
            received = changes.recv() => match received {
                Ok(change) => debug!("Subscription woke for {change:?}"),
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Subscription skipped {skipped} change notifications");
                }
                Err(RecvError::Closed) => {
                    debug!("Tracker dropped, ending subscription");
                    return;
                }
            },
            _ = ticker.tick() => {}
        }
    }
}
