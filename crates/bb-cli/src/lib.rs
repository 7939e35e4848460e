//! Baby tracker CLI library.
//!
//! This crate provides the CLI interface for the baby tracker.

mod cli;
pub mod commands;
mod config;

pub use cli::{ApptAction, ChildAction, Cli, Commands, LogEvent, SleepAction};
pub use config::Config;
