//! Database operations and SQLite management for habits.
//!
//! This module provides the SQLite implementation of [`crate::HabitStore`].
//! It handles connections, schema management and the transactional
//! read-modify-write used for completions.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod habit_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// SQLite's `data_version` for this connection.
    ///
    /// The value changes whenever another connection commits, which is how
    /// subscriptions notice writes made by other processes.
    pub fn data_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA data_version", [], |row| row.get(0))
            .db_context("Failed to read data version")
    }
}
