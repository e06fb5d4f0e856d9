//! Error types for the habit tracker library.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database query or schema errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store could not be reached right now; retrying may succeed
    #[error("Habit store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Habit not found for the given ID
    #[error("Habit with ID {id} not found")]
    HabitNotFound { id: u64 },
    /// The habit already reached its effective daily goal
    #[error("Habit with ID {id} already reached its daily goal of {goal}")]
    GoalAlreadyMet { id: u64, goal: u32 },
    /// Persisted state broke an entity invariant and was repaired on load
    #[error("Corrupt state for habit {id}: field '{field}' held {value}, healed to {healed}")]
    CorruptState {
        id: u64,
        field: &'static str,
        value: String,
        healed: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    ///
    /// Busy, locked and unopenable databases become
    /// [`TrackerError::StoreUnavailable`]; everything else is a plain
    /// [`TrackerError::Database`] error.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        if is_unavailable(&source) {
            TrackerError::StoreUnavailable {
                message: self.message,
                source,
            }
        } else {
            TrackerError::Database {
                message: self.message,
                source,
            }
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the failed operation may succeed if retried unchanged.
    ///
    /// Only store outages are transient. A missing habit will stay missing, so
    /// callers should refresh their view instead of retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, TrackerError::StoreUnavailable { .. })
    }

    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

fn is_unavailable(error: &rusqlite::Error) -> bool {
    matches!(
        error.sqlite_error_code(),
        Some(
            ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::ReadOnly
                | ErrorCode::SystemIoFailure
        )
    )
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use rusqlite::ffi;

    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn test_busy_database_is_store_unavailable() {
        let error = TrackerError::database("Failed to write habit")
            .with_source(sqlite_failure(ffi::SQLITE_BUSY));

        assert!(matches!(error, TrackerError::StoreUnavailable { .. }));
        assert!(error.is_transient());
        assert!(error.to_string().contains("Failed to write habit"));
    }

    #[test]
    fn test_constraint_failure_is_plain_database_error() {
        let error = TrackerError::database("Failed to insert habit")
            .with_source(sqlite_failure(ffi::SQLITE_CONSTRAINT));

        assert!(matches!(error, TrackerError::Database { .. }));
        assert!(!error.is_transient());
    }

    #[test]
    fn test_not_found_is_not_transient() {
        let error = TrackerError::HabitNotFound { id: 7 };
        assert!(!error.is_transient());
        assert_eq!(error.to_string(), "Habit with ID 7 not found");
    }

    #[test]
    fn test_invalid_input_builder() {
        let error = TrackerError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
    }
}
