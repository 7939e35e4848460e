//! Selected-day navigation.
//!
//! The selected day scopes every `log`, `remove`, and `sleep` mutation;
//! it is persisted with the snapshot so it survives between invocations.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use bb_core::Tracker;

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    date: Option<String>,
    today: NaiveDate,
) -> Result<bool> {
    let Some(date) = date else {
        writeln!(writer, "Selected day: {}", tracker.selected_date())?;
        return Ok(false);
    };

    let date = if date == "today" {
        today
    } else {
        date.parse::<NaiveDate>()
            .with_context(|| format!("invalid date: {date} (expected YYYY-MM-DD or \"today\")"))?
    };
    tracker.select_date(date);
    writeln!(writer, "Selected day set to {date}.")?;
    Ok(true)
}
