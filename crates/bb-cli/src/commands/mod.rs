//! CLI subcommand implementations.

pub mod appointment;
pub mod child;
pub mod date;
pub mod day;
pub mod log;
pub mod remove;
pub mod report;
pub mod sleep;
pub mod status;

/// Shown whenever a mutation needs an active child and none exists.
pub(crate) const NO_ACTIVE_CHILD: &str =
    "No active child. Add one with `bb child add <name> --gender <boy|girl> --dob <YYYY-MM-DD>`.";
