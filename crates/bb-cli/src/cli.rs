//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use bb_core::{BreastSide, DiaperKind, Gender, PoopColor, PoopConsistency, Theme};

/// Baby-care logger.
///
/// Records feedings, diapers, sleep, and more against a selected calendar
/// day, and rolls the last week up into per-day summaries.
#[derive(Debug, Parser)]
#[command(name = "bb", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the active child, selected day, and today's totals.
    Status,

    /// Manage child profiles.
    Child {
        #[command(subcommand)]
        action: ChildAction,
    },

    /// Show or change the selected day.
    Date {
        /// A calendar date (YYYY-MM-DD) or "today".
        date: Option<String>,
    },

    /// Record an event under the selected day.
    Log {
        #[command(subcommand)]
        event: LogEvent,
    },

    /// Remove an entry from the selected day.
    Remove {
        /// Category: pee, poop, feeding, diaper, sleep, colic, or note.
        category: String,

        /// The entry id to remove (shown by `bb day`).
        id: String,
    },

    /// Sleep timer and manual sleep entry.
    Sleep {
        #[command(subcommand)]
        action: SleepAction,
    },

    /// Show everything logged on one day.
    Day {
        /// Day to show (defaults to the selected day).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Summarize the last 7 days, ending today.
    Report {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Manage appointments for the active child.
    Appt {
        #[command(subcommand)]
        action: ApptAction,
    },
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ChildAction {
    /// Add a profile; the first one added becomes active.
    Add {
        /// Display name.
        name: String,

        #[arg(long)]
        gender: Gender,

        /// Date of birth (YYYY-MM-DD).
        #[arg(long)]
        dob: NaiveDate,

        /// Color theme (defaults to "default").
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// List profiles; the active one is starred.
    List,

    /// Update fields on a profile.
    Update {
        /// The profile id (shown by `bb child list`).
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        gender: Option<Gender>,

        /// Date of birth (YYYY-MM-DD).
        #[arg(long)]
        dob: Option<NaiveDate>,

        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Remove a profile along with its logs and appointments.
    Remove {
        /// The profile id.
        id: String,
    },

    /// Make a profile the active one.
    Use {
        /// The profile id.
        id: String,
    },
}

/// Event categories that can be logged.
#[derive(Debug, Subcommand)]
pub enum LogEvent {
    /// One-tap urination entry.
    Pee {
        #[arg(long)]
        note: Option<String>,
    },

    /// Bowel movement with optional observations.
    Poop {
        /// Stool color: yellow, green, brown, or black.
        #[arg(long)]
        color: Option<PoopColor>,

        /// Stool consistency: runny, soft, or firm.
        #[arg(long)]
        consistency: Option<PoopConsistency>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Breastfeeding with side and duration.
    Feeding {
        /// Side: left or right.
        #[arg(long)]
        side: BreastSide,

        /// Duration in whole minutes.
        #[arg(long)]
        minutes: u32,

        #[arg(long)]
        note: Option<String>,
    },

    /// Diaper change.
    Diaper {
        /// What the change found: wet, soiled, both, or dry.
        #[arg(long)]
        kind: DiaperKind,

        #[arg(long)]
        note: Option<String>,
    },

    /// Colic/fussiness rating.
    Colic {
        /// Severity from 1 (mild) to 5 (severe).
        #[arg(long)]
        level: u8,

        #[arg(long)]
        note: Option<String>,
    },

    /// Free-text note.
    Note {
        /// The note text.
        text: String,
    },
}

/// Sleep timer and manual entry actions.
#[derive(Debug, Subcommand)]
pub enum SleepAction {
    /// Start the sleep timer under the selected day.
    Start {
        #[arg(long)]
        note: Option<String>,
    },

    /// Stop the open sleep session and derive its duration.
    End,

    /// Record an already-finished sleep by elapsed time.
    Add {
        #[arg(long, default_value_t = 0)]
        hours: u32,

        #[arg(long, default_value_t = 0)]
        minutes: u32,

        #[arg(long)]
        note: Option<String>,
    },
}

/// Appointment actions.
#[derive(Debug, Subcommand)]
pub enum ApptAction {
    /// Schedule a visit for the active child.
    Add {
        /// Appointment title.
        title: String,

        /// Visit date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// Time of day (HH:MM).
        #[arg(long)]
        time: Option<NaiveTime>,

        #[arg(long)]
        doctor: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// List appointments, upcoming first.
    List,

    /// Toggle an appointment's completed flag.
    Done {
        /// The appointment id (shown by `bb appt list`).
        id: String,
    },

    /// Remove an appointment.
    Remove {
        /// The appointment id.
        id: String,
    },
}
