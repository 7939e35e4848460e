use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bb_cli::commands::{appointment, child, date, day, log, remove, report, sleep, status};
use bb_cli::{Cli, Commands, Config};
use bb_core::Tracker;
use bb_store::SnapshotFile;

/// Load config and open the snapshot, rehydrating persisted state or
/// starting from empty defaults with today selected.
fn open_tracker(config_path: Option<&Path>) -> Result<(SnapshotFile, Tracker)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let file = SnapshotFile::at(&config.data_path);
    let tracker = file.load_or_default(Local::now().date_naive());
    Ok((file, tracker))
}

/// Persist the tracker. Failures warn instead of aborting: the in-memory
/// mutation already happened and the next successful save catches up.
fn persist(file: &SnapshotFile, tracker: &Tracker) {
    if let Err(err) = file.save(tracker) {
        tracing::warn!(path = %file.path().display(), %err, "failed to persist snapshot");
        eprintln!(
            "warning: could not save to {}: {err}",
            file.path().display()
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let Some(command) = cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let (file, mut tracker) = open_tracker(cli.config.as_deref())?;
    let now = Utc::now();
    let today = Local::now().date_naive();
    let mut out = std::io::stdout();

    let changed = match command {
        Commands::Status => {
            status::run(&mut out, &tracker, file.path(), today)?;
            false
        }
        Commands::Child { action } => child::run(&mut out, &mut tracker, action, today)?,
        Commands::Date { date } => date::run(&mut out, &mut tracker, date, today)?,
        Commands::Log { event } => log::run(&mut out, &mut tracker, event, now)?,
        Commands::Remove { category, id } => remove::run(&mut out, &mut tracker, &category, &id)?,
        Commands::Sleep { action } => sleep::run(&mut out, &mut tracker, action, now)?,
        Commands::Day { date } => {
            day::run(&mut out, &tracker, date)?;
            false
        }
        Commands::Report { json } => {
            report::run(&mut out, &tracker, json, today)?;
            false
        }
        Commands::Appt { action } => appointment::run(&mut out, &mut tracker, action)?,
    };

    if changed {
        persist(&file, &tracker);
    }

    Ok(())
}
