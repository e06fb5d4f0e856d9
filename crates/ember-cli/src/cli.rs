//! Command handlers and argument wrappers for the `ember` binary.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `ember_core::params` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] owns the tracker and the renderer and prints each result either
//! as markdown or, with `--json`, as a JSON document.

use anyhow::{Context, Result};
use clap::Args;
use ember_core::{
    display::OperationStatus,
    params::{CompleteHabit, CreateHabit, DeleteHabit, Id},
    Habit, TrackerError, Tracker,
};
use log::{debug, info};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

#[derive(Args)]
pub struct AddArgs {
    /// Name of the habit, e.g. "Drink water"
    pub name: String,
    /// How many times a day counts as done (omit for once a day)
    #[arg(short, long)]
    pub goal: Option<String>,
}

impl From<AddArgs> for CreateHabit {
    fn from(val: AddArgs) -> Self {
        CreateHabit {
            name: val.name,
            goal_per_day: val.goal,
        }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier of the habit to show")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct DoneArgs {
    #[arg(help = "Unique identifier of the habit you just did")]
    pub id: u64,
    /// Record the completion even if today's goal is already met
    #[arg(short, long)]
    pub force: bool,
}

impl From<DoneArgs> for CompleteHabit {
    fn from(val: DoneArgs) -> Self {
        CompleteHabit {
            id: val.id,
            force: val.force,
        }
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Unique identifier of the habit to permanently delete")]
    pub id: u64,
    /// Confirm the deletion; history cannot be recovered
    #[arg(short, long)]
    pub yes: bool,
}

impl From<DeleteArgs> for DeleteHabit {
    fn from(val: DeleteArgs) -> Self {
        DeleteHabit {
            id: val.id,
            confirmed: val.yes,
        }
    }
}

/// Runs commands against a tracker and prints the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            tracker,
            renderer,
            json,
        }
    }

    fn emit<T: Serialize + std::fmt::Display>(&self, value: &T) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&value.to_string())
        }
    }

    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let result = self.tracker.create_habit_result(&args.into()).await?;
        self.emit(&result)
    }

    pub async fn list(&self) -> Result<()> {
        let board = self.tracker.habit_board().await?;
        self.emit(&board)
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let id = args.id;
        let view = self
            .tracker
            .show_habit(&args.into())
            .await?
            .ok_or(TrackerError::HabitNotFound { id })?;
        self.emit(&view)
    }

    pub async fn done(&self, args: DoneArgs) -> Result<()> {
        let result = self.tracker.complete_habit_result(&args.into()).await?;
        self.emit(&result)
    }

    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let result = self.tracker.delete_habit(&args.into()).await?;
        self.emit(&result)
    }

    pub async fn sweep(&self) -> Result<()> {
        let count = self.tracker.sweep_stale_counters().await?;
        if self.json {
            println!("{}", serde_json::json!({ "reset": count }));
            Ok(())
        } else {
            self.renderer
                .render(&OperationStatus::counters_reset(count).to_string())
        }
    }

    /// Re-renders the board on every change until Ctrl-C.
    pub async fn watch(&self) -> Result<()> {
        let reset = self.tracker.sweep_stale_counters().await?;
        debug!("Watch session reset {reset} stale counters");

        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Habit>>();
        let subscription = self
            .tracker
            .subscribe(move |habits| {
                // The receiver only goes away on shutdown
                let _ = tx.send(habits);
            })
            .context("Failed to subscribe to habit changes")?;
        info!("Watching for habit changes");

        loop {
            tokio::select! {
                snapshot = rx.recv() => {
                    let Some(habits) = snapshot else {
                        anyhow::bail!("Lost connection to the habit store");
                    };
                    let board = ember_core::HabitBoard::new(habits, self.tracker.today());
                    if self.json {
                        println!("{}", serde_json::to_string(&board).context("Failed to encode JSON")?);
                    } else {
                        self.renderer
                            .clear_screen()
                            .context("Failed to clear the screen")?;
                        self.renderer.render(&board.to_string())?;
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    signal.context("Failed to listen for Ctrl-C")?;
                    break;
                }
            }
        }

        subscription.unsubscribe();
        info!("Stopped watching");
        Ok(())
    }
}

/// A follow-up line for errors the user can act on.
pub fn hint_for(error: &anyhow::Error) -> Option<&'static str> {
    match error.downcast_ref::<TrackerError>()? {
        e if e.is_transient() => Some("The habit store is busy. Please try again in a moment."),
        TrackerError::HabitNotFound { .. } => {
            Some("That habit may have been deleted. Run `ember list` to refresh.")
        }
        TrackerError::GoalAlreadyMet { .. } => {
            Some("Use `--force` to record it anyway.")
        }
        TrackerError::InvalidInput { field, .. } if field == "confirmed" => {
            Some("Pass `--yes` to confirm.")
        }
        _ => None,
    }
}
