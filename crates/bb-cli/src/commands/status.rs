//! Status command showing the active selection and today's totals.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use bb_core::{Tracker, daily_summary, format_age};

use super::day::format_time;
use super::report::format_duration;

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &Tracker,
    data_path: &Path,
    today: NaiveDate,
) -> Result<()> {
    writeln!(writer, "Baby tracker status")?;
    writeln!(writer, "Snapshot: {}", data_path.display())?;

    let Some(child) = tracker.active_child() else {
        writeln!(writer, "No active child.")?;
        return Ok(());
    };

    writeln!(
        writer,
        "Active child: {} ({})",
        child.name,
        format_age(child.date_of_birth, today)
    )?;
    writeln!(writer, "Selected day: {}", tracker.selected_date())?;

    let summary = daily_summary(&tracker.day(today));
    writeln!(
        writer,
        "Today: {} pee, {} poop, {} diaper changes, {} feedings ({}), {} sleep",
        summary.pee_count,
        summary.poop_count,
        summary.diaper_change_count,
        summary.feeding_count,
        format_duration(summary.total_feeding_minutes),
        format_duration(summary.total_sleep_minutes),
    )?;

    if let Some((date, entry)) = tracker.open_sleep() {
        writeln!(
            writer,
            "Sleep timer running since {} (under {date}).",
            format_time(entry.start())
        )?;
    }

    Ok(())
}
