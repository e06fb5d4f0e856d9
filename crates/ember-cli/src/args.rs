use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, DeleteArgs, DoneArgs, ShowArgs};

/// Ember keeps your daily habits burning
///
/// Track habits that you do one or more times a day. Each day you complete
/// a habit extends its streak; skip a day and the streak starts over.
/// Running `ember` without a command shows today's board.
#[derive(Parser)]
#[command(version, about, name = "ember")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ember/ember.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Ember CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a new habit
    #[command(alias = "a")]
    Add(AddArgs),
    /// Show every habit as it stands today
    #[command(alias = "ls")]
    List,
    /// Show one habit in detail
    Show(ShowArgs),
    /// Record that you did a habit just now
    #[command(alias = "d")]
    Done(DoneArgs),
    /// Permanently delete a habit
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Reset daily counters left over from previous days
    Sweep,
    /// Keep the board on screen and refresh it on every change
    Watch,
}
