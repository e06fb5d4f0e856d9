//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases only had the lifetime counter; the daily counter was
        // added once per-day goals arrived.
        let has_completions_today: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('habits') WHERE name = 'completions_today'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect habits table")?;

        if !has_completions_today {
            debug!("Adding completions_today column to habits table");
            self.connection
                .execute(
                    "ALTER TABLE habits ADD COLUMN completions_today INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add completions_today column to habits table")?;
        }

        Ok(())
    }
}
