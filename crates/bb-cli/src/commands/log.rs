//! Event logging under the selected day.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use bb_core::{ColicLevel, Tracker};

use super::NO_ACTIVE_CHILD;
use crate::LogEvent;

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    event: LogEvent,
    now: DateTime<Utc>,
) -> Result<bool> {
    let recorded = match event {
        LogEvent::Pee { note } => tracker.add_pee(now, note).map(|id| ("pee", id)),
        LogEvent::Poop {
            color,
            consistency,
            note,
        } => tracker
            .add_poop(now, color, consistency, note)
            .map(|id| ("poop", id)),
        LogEvent::Feeding {
            side,
            minutes,
            note,
        } => tracker
            .add_feeding(now, side, minutes, note)
            .map(|id| ("feeding", id)),
        LogEvent::Diaper { kind, note } => tracker
            .add_diaper(now, kind, note)
            .map(|id| ("diaper change", id)),
        LogEvent::Colic { level, note } => {
            let level = ColicLevel::new(level)?;
            tracker
                .add_colic(now, level, note)
                .map(|id| ("colic rating", id))
        }
        LogEvent::Note { text } => tracker.add_note(now, text).map(|id| ("note", id)),
    };

    match recorded {
        Some((what, id)) => {
            writeln!(
                writer,
                "Logged {what} under {} ({id}).",
                tracker.selected_date()
            )?;
            Ok(true)
        }
        None => {
            writeln!(writer, "{NO_ACTIVE_CHILD}")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use bb_core::{BreastSide, Gender};
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn logs_a_feeding_under_the_selected_day() {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            LogEvent::Feeding {
                side: BreastSide::Left,
                minutes: 12,
                note: None,
            },
            now(),
        )
        .unwrap();

        assert!(changed);
        assert_eq!(tracker.day(today()).feedings.len(), 1);
        assert!(String::from_utf8(output).unwrap().contains("2026-03-14"));
    }

    #[test]
    fn without_a_child_nothing_is_recorded() {
        let mut tracker = Tracker::new(today());

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            LogEvent::Pee { note: None },
            now(),
        )
        .unwrap();

        assert!(!changed);
        assert!(tracker.day(today()).is_empty());
        assert!(String::from_utf8(output).unwrap().contains("No active child"));
    }

    #[test]
    fn colic_level_is_validated_at_the_boundary() {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let mut output = Vec::new();
        let result = run(
            &mut output,
            &mut tracker,
            LogEvent::Colic {
                level: 9,
                note: None,
            },
            now(),
        );

        assert!(result.is_err());
        assert!(tracker.day(today()).colic.is_empty());
    }
}
