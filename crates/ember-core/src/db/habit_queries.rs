//! Habit CRUD operations and the completion transaction.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Value, Connection, OptionalExtension, Row, TransactionBehavior};

use crate::{
    calendar::DayKey,
    engine::{effective_goal, is_counter_stale, is_goal_met, Completion},
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Habit, HabitRecord, NewHabit, UpdateHabitRequest},
    store::HabitStore,
};

const HABIT_COLUMNS: &str = "id, name, goal_per_day, streak, last_completed_day, completions_today, total_completions, created_at";
const INSERT_HABIT_SQL: &str = "INSERT INTO habits (name, goal_per_day, streak, last_completed_day, completions_today, total_completions, created_at) VALUES (?1, ?2, 0, NULL, 0, 0, ?3)";
const UPDATE_HABIT_SQL: &str = "UPDATE habits SET name = ?1, goal_per_day = ?2, streak = ?3, last_completed_day = ?4, completions_today = ?5, total_completions = ?6 WHERE id = ?7";
const RESET_TODAY_SQL: &str = "UPDATE habits SET completions_today = 0 WHERE id = ?1";
const DELETE_HABIT_SQL: &str = "DELETE FROM habits WHERE id = ?1";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<HabitRecord> {
    Ok(HabitRecord {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get::<_, Value>(1)?,
        goal_per_day: row.get::<_, Value>(2)?,
        streak: row.get::<_, Value>(3)?,
        last_completed_day: row.get::<_, Value>(4)?,
        completions_today: row.get::<_, Value>(5)?,
        total_completions: row.get::<_, Value>(6)?,
        created_at: row.get::<_, Value>(7)?,
    })
}

fn query_habit(conn: &Connection, id: u64) -> Result<Option<Habit>> {
    let sql = format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1");
    let record = conn
        .query_row(&sql, params![id as i64], record_from_row)
        .optional()
        .db_context("Failed to query habit")?;
    Ok(record.map(HabitRecord::into_habit))
}

fn query_habits(conn: &Connection) -> Result<Vec<Habit>> {
    let sql = format!("SELECT {HABIT_COLUMNS} FROM habits ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql).db_context("Failed to prepare query")?;
    let records = stmt
        .query_map([], record_from_row)
        .db_context("Failed to query habits")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read habit row")?;
    Ok(records.into_iter().map(HabitRecord::into_habit).collect())
}

fn write_habit(conn: &Connection, habit: &Habit) -> Result<()> {
    conn.execute(
        UPDATE_HABIT_SQL,
        params![
            habit.name,
            habit.goal_per_day.map(|g| g.get()),
            habit.streak,
            habit.last_completed_day.map(|d| d.to_string()),
            habit.completions_today,
            i64::try_from(habit.total_completions).unwrap_or(i64::MAX),
            habit.id as i64,
        ],
    )
    .db_context("Failed to write habit")?;
    Ok(())
}

fn normalized_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input("name").with_reason("Habit name must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl HabitStore for super::Database {
    fn create(&mut self, habit: &NewHabit) -> Result<Habit> {
        let name = normalized_name(&habit.name)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_HABIT_SQL,
            params![name, habit.goal_per_day.map(|g| g.get()), now.to_string()],
        )
        .db_context("Failed to insert habit")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created habit {id}");

        Ok(Habit::new(id, name, habit.goal_per_day, now))
    }

    fn update(&mut self, id: u64, request: &UpdateHabitRequest) -> Result<Habit> {
        let name = request.name.as_deref().map(normalized_name).transpose()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        // First, get the current habit to preserve unchanged fields
        let current = query_habit(&tx, id)?.ok_or(TrackerError::HabitNotFound { id })?;
        if request.is_empty() {
            return Ok(current);
        }

        let updated = Habit {
            name: name.unwrap_or(current.name),
            goal_per_day: request.goal_per_day.unwrap_or(current.goal_per_day),
            streak: request.streak.unwrap_or(current.streak),
            last_completed_day: request
                .last_completed_day
                .unwrap_or(current.last_completed_day),
            completions_today: request.completions_today.unwrap_or(current.completions_today),
            total_completions: request.total_completions.unwrap_or(current.total_completions),
            ..current
        };

        write_habit(&tx, &updated)?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated habit {id}");

        Ok(updated)
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_HABIT_SQL, params![id as i64])
            .db_context("Failed to delete habit")?;

        if deleted == 0 {
            return Err(TrackerError::HabitNotFound { id });
        }
        debug!("Deleted habit {id}");
        Ok(())
    }

    fn get(&self, id: u64) -> Result<Option<Habit>> {
        query_habit(&self.connection, id)
    }

    fn list(&self) -> Result<Vec<Habit>> {
        query_habits(&self.connection)
    }
}

impl super::Database {
    /// Records one completion of habit `id` on `today` as a single
    /// read-modify-write transaction.
    ///
    /// With `stop_at_goal`, a habit whose effective daily goal is already
    /// met today is left untouched and `TrackerError::GoalAlreadyMet` is
    /// returned. A habit without an explicit goal counts as having a goal of
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if no habit has this id.
    pub fn complete_habit(&mut self, id: u64, today: DayKey, stop_at_goal: bool) -> Result<Completion> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let current = query_habit(&tx, id)?.ok_or(TrackerError::HabitNotFound { id })?;
        if stop_at_goal && is_goal_met(&current, today) {
            return Err(TrackerError::GoalAlreadyMet {
                id,
                goal: effective_goal(&current),
            });
        }

        let completion = Completion::record(current, today);
        write_habit(&tx, &completion.after)?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Recorded completion of habit {id} on {today}: streak {} -> {}",
            completion.before.streak, completion.after.streak
        );
        Ok(completion)
    }

    /// Zeroes `completions_today` on every habit whose counter belongs to a
    /// day other than `today`. Returns how many habits were reset.
    ///
    /// Only the daily counter is written; streaks, completion days and
    /// totals are never touched.
    pub fn sweep_stale_counters(&mut self, today: DayKey) -> Result<usize> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let stale: Vec<u64> = query_habits(&tx)?
            .iter()
            .filter(|habit| is_counter_stale(habit, today))
            .map(|habit| habit.id)
            .collect();

        for id in &stale {
            tx.execute(RESET_TODAY_SQL, params![*id as i64])
                .db_context("Failed to reset daily counter")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Reset {} stale daily counters", stale.len());

        Ok(stale.len())
    }
}
