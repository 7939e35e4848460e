//! Report command for the rolling 7-day summary.
//!
//! This module implements `bb report` with human-readable and JSON output.
//! The window always ends on the real current date, regardless of the
//! day the caregiver has navigated to.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use bb_core::{DailySummary, Tracker, average, high, last_7_day_summaries, low};

use super::NO_ACTIVE_CHILD;

// ========== Duration Formatting ==========

/// Formats whole minutes as a duration string.
/// Returns "Xh Ym" (or "Xh" on the hour) if >= 1 hour, "Xm" below.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

// ========== Progress Bar ==========

/// Generates a 10-character progress bar.
/// Values <5% of max get a single block for visibility.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(value: u32, max: u32) -> String {
    // Weeks with no sleep at all render an empty bar
    if max == 0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = f64::from(value) / f64::from(max);
    let filled = if ratio < 0.05 && value > 0 {
        1 // Minimum 1 for visibility
    } else {
        (ratio * 10.0).round().min(10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// ========== Report Generation ==========

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &Tracker,
    json: bool,
    today: NaiveDate,
) -> Result<()> {
    let Some(child) = tracker.active_child() else {
        writeln!(writer, "{NO_ACTIVE_CHILD}")?;
        return Ok(());
    };
    let empty = BTreeMap::new();
    let logs = tracker.child_logs().unwrap_or(&empty);
    let summaries = last_7_day_summaries(logs, today);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else {
        write!(writer, "{}", format_report(&child.name, &summaries))?;
    }
    Ok(())
}

/// Formats the human-readable report output.
#[must_use]
pub fn format_report(child_name: &str, summaries: &[DailySummary]) -> String {
    let mut output = String::new();
    let Some((first, last)) = summaries.first().zip(summaries.last()) else {
        return output;
    };

    writeln!(
        output,
        "LAST 7 DAYS: {child_name}, {} to {}",
        first.date, last.date
    )
    .unwrap();
    writeln!(output).unwrap();

    let max_sleep = summaries
        .iter()
        .map(|s| s.total_sleep_minutes)
        .max()
        .unwrap_or(0);

    writeln!(
        output,
        "Day  Date        Pee  Poop  Diaper  Feeds      Fed  Sleep"
    )
    .unwrap();
    for s in summaries {
        let bar = progress_bar(s.total_sleep_minutes, max_sleep);
        writeln!(
            output,
            "{}  {}  {:>3}  {:>4}  {:>6}  {:>5}  {:>7}  {bar} {}",
            s.date.format("%a"),
            s.date,
            s.pee_count,
            s.poop_count,
            s.diaper_change_count,
            s.feeding_count,
            format_duration(s.total_feeding_minutes),
            format_duration(s.total_sleep_minutes),
        )
        .unwrap();
    }

    // Week footer from the stats helpers
    let feeding: Vec<f64> = summaries
        .iter()
        .map(|s| f64::from(s.total_feeding_minutes))
        .collect();
    let sleep: Vec<f64> = summaries
        .iter()
        .map(|s| f64::from(s.total_sleep_minutes))
        .collect();

    writeln!(output).unwrap();
    writeln!(
        output,
        "Feeding: avg {}m/day (high {}m, low {}m)",
        average(&feeding),
        high(&feeding),
        low(&feeding)
    )
    .unwrap();
    writeln!(
        output,
        "Sleep:   avg {}m/day (high {}m, low {}m)",
        average(&sleep),
        high(&sleep),
        low(&sleep)
    )
    .unwrap();

    let levels: Vec<f64> = summaries
        .iter()
        .filter(|s| s.colic_count > 0)
        .map(|s| s.avg_colic_level)
        .collect();
    if !levels.is_empty() {
        writeln!(
            output,
            "Colic:   avg level {} on {} day(s)",
            average(&levels),
            levels.len()
        )
        .unwrap();
    }

    output
}
