//! Core domain logic for the baby tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - The tracker store: child profiles and per-(child, day) event logs
//! - The sleep session state machine (timer and manual entry)
//! - Summary statistics and the rolling 7-day trend window
//! - Per-child appointment bookkeeping

pub mod appointment;
pub mod entry;
pub mod log;
pub mod profile;
pub mod store;
pub mod summary;
pub mod types;

pub use appointment::{Appointment, AppointmentUpdate, NewAppointment, sorted_for_display};
pub use entry::{BreastSide, DiaperKind, PoopColor, PoopConsistency, SleepSession};
pub use log::DailyLog;
pub use profile::{ChildProfile, Gender, ProfileUpdate, Theme, format_age};
pub use store::{SleepError, Tracker};
pub use summary::{DailySummary, average, daily_summary, high, last_7_day_summaries, low};
pub use types::{AppointmentId, ChildId, ColicLevel, EntryId, ValidationError};
