//! Day view: everything logged on one calendar day.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};

use bb_core::{DailyLog, SleepSession, Tracker};

use super::NO_ACTIVE_CHILD;
use super::report::format_duration;

/// Renders an entry timestamp as local wall-clock time.
pub(crate) fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

pub fn run<W: Write>(writer: &mut W, tracker: &Tracker, date: Option<NaiveDate>) -> Result<()> {
    let Some(child) = tracker.active_child() else {
        writeln!(writer, "{NO_ACTIVE_CHILD}")?;
        return Ok(());
    };
    let date = date.unwrap_or_else(|| tracker.selected_date());
    let log = tracker.day(date);

    writeln!(writer, "{} ({})", date.format("%a %Y-%m-%d"), child.name)?;
    if log.is_empty() {
        writeln!(writer, "Nothing logged.")?;
        return Ok(());
    }
    write_sections(writer, &log)
}

fn write_sections<W: Write>(writer: &mut W, log: &DailyLog) -> Result<()> {
    if !log.pee.is_empty() {
        writeln!(writer, "Pee:")?;
        for entry in &log.pee {
            writeln!(
                writer,
                "  {}  {}{}",
                format_time(entry.timestamp),
                entry.id,
                note_suffix(entry.note.as_deref())
            )?;
        }
    }

    if !log.poop.is_empty() {
        writeln!(writer, "Poop:")?;
        for entry in &log.poop {
            let mut details = Vec::new();
            if let Some(color) = entry.color {
                details.push(color.to_string());
            }
            if let Some(consistency) = entry.consistency {
                details.push(consistency.to_string());
            }
            let details = if details.is_empty() {
                String::new()
            } else {
                format!(" ({})", details.join(", "))
            };
            writeln!(
                writer,
                "  {}  {}{details}{}",
                format_time(entry.timestamp),
                entry.id,
                note_suffix(entry.note.as_deref())
            )?;
        }
    }

    if !log.feedings.is_empty() {
        writeln!(writer, "Feedings:")?;
        for entry in &log.feedings {
            writeln!(
                writer,
                "  {}  {} {}  {}{}",
                format_time(entry.timestamp),
                entry.side,
                format_duration(entry.duration_minutes),
                entry.id,
                note_suffix(entry.note.as_deref())
            )?;
        }
    }

    if !log.diaper_changes.is_empty() {
        writeln!(writer, "Diaper changes:")?;
        for entry in &log.diaper_changes {
            writeln!(
                writer,
                "  {}  {}  {}{}",
                format_time(entry.timestamp),
                entry.kind,
                entry.id,
                note_suffix(entry.note.as_deref())
            )?;
        }
    }

    if !log.sleeps.is_empty() {
        writeln!(writer, "Sleep:")?;
        for entry in &log.sleeps {
            match entry.session {
                SleepSession::Open { start } => {
                    writeln!(
                        writer,
                        "  {}  still sleeping  {}",
                        format_time(start),
                        entry.id
                    )?;
                }
                SleepSession::Closed {
                    start,
                    end,
                    duration_minutes,
                } => {
                    writeln!(
                        writer,
                        "  {}-{}  {}  {}{}",
                        format_time(start),
                        format_time(end),
                        format_duration(duration_minutes),
                        entry.id,
                        note_suffix(entry.note.as_deref())
                    )?;
                }
            }
        }
    }

    if !log.colic.is_empty() {
        writeln!(writer, "Colic:")?;
        for entry in &log.colic {
            writeln!(
                writer,
                "  {}  level {}  {}{}",
                format_time(entry.timestamp),
                entry.level,
                entry.id,
                note_suffix(entry.note.as_deref())
            )?;
        }
    }

    if !log.notes.is_empty() {
        writeln!(writer, "Notes:")?;
        for entry in &log.notes {
            writeln!(
                writer,
                "  {}  {}  {}",
                format_time(entry.timestamp),
                entry.text,
                entry.id
            )?;
        }
    }

    Ok(())
}

fn note_suffix(note: Option<&str>) -> String {
    note.map(|n| format!(" - {n}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use bb_core::{BreastSide, DiaperKind, Gender};
    use chrono::TimeZone;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn renders_every_populated_section_with_ids() {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let feeding = tracker
            .add_feeding(now(), BreastSide::Left, 12, Some("sleepy".to_string()))
            .unwrap();
        let diaper = tracker.add_diaper(now(), DiaperKind::Wet, None).unwrap();
        let sleep = tracker.start_sleep(now(), None).unwrap();

        let mut output = Vec::new();
        run(&mut output, &tracker, None).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Feedings:"));
        assert!(output.contains("left 12m"));
        assert!(output.contains("- sleepy"));
        assert!(output.contains(feeding.as_str()));
        assert!(output.contains("Diaper changes:"));
        assert!(output.contains(diaper.as_str()));
        assert!(output.contains("still sleeping"));
        assert!(output.contains(sleep.as_str()));
        // Empty categories stay out of the view
        assert!(!output.contains("Poop:"));
        assert!(!output.contains("Colic:"));
    }

    #[test]
    fn empty_day_says_so() {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let mut output = Vec::new();
        run(&mut output, &tracker, None).unwrap();

        assert!(String::from_utf8(output).unwrap().contains("Nothing logged."));
    }

    #[test]
    fn without_a_child_the_view_is_a_hint() {
        let tracker = Tracker::new(today());

        let mut output = Vec::new();
        run(&mut output, &tracker, None).unwrap();

        assert!(String::from_utf8(output).unwrap().contains("No active child"));
    }
}
