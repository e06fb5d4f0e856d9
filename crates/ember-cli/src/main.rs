//! Ember CLI Application
//!
//! Command-line interface for the ember habit tracker.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{hint_for, Cli};
use ember_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            if let Some(hint) = hint_for(&error) {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        database_file,
        no_color,
        json,
        command,
    } = args;

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize habit tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Ember started");

    let cli = Cli::new(tracker, renderer, json);
    match command {
        Some(Add(args)) => cli.add(args).await,
        Some(List) | None => cli.list().await,
        Some(Show(args)) => cli.show(args).await,
        Some(Done(args)) => cli.done(args).await,
        Some(Delete(args)) => cli.delete(args).await,
        Some(Sweep) => cli.sweep().await,
        Some(Watch) => cli.watch().await,
    }
}
