//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use tokio::task;

use super::Tracker;
use crate::{
    calendar::{Clock, SystemClock},
    db::Database,
    error::{Result, TrackerError},
};

/// How often subscriptions look for writes made by other processes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Builder for creating and configuring Tracker instances.
#[derive(Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Arc::new(SystemClock),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/ember/ember.db` or `~/.local/share/ember/ember.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the clock that decides which calendar day it is.
    ///
    /// Defaults to [`SystemClock`], the host's local time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets how often subscriptions poll for changes made by other
    /// processes. Changes made through the same tracker are delivered
    /// immediately regardless.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Configuration` if the poll interval is zero
    /// Returns `TrackerError::FileSystem` if the database path is invalid
    /// Returns `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        if self.poll_interval.is_zero() {
            return Err(TrackerError::Configuration {
                message: "Poll interval must be greater than zero".to_string(),
            });
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(TrackerError::join)??;

        Ok(Tracker::new(db_path, self.clock, self.poll_interval))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("ember")
            .place_data_file("ember.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
