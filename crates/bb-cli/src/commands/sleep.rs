//! Sleep timer and manual sleep entry.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};

use bb_core::{SleepError, Tracker};

use super::NO_ACTIVE_CHILD;
use super::day::format_time;
use super::report::format_duration;
use crate::SleepAction;

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    action: SleepAction,
    now: DateTime<Utc>,
) -> Result<bool> {
    match action {
        SleepAction::Start { note } => match tracker.start_sleep(now, note) {
            Ok(id) => {
                writeln!(
                    writer,
                    "Sleep timer started under {} ({id}).",
                    tracker.selected_date()
                )?;
                Ok(true)
            }
            Err(SleepError::NoActiveChild) => {
                writeln!(writer, "{NO_ACTIVE_CHILD}")?;
                Ok(false)
            }
            Err(SleepError::SessionAlreadyOpen) => {
                if let Some((date, entry)) = tracker.open_sleep() {
                    writeln!(
                        writer,
                        "A sleep session is already open since {} (under {date}).",
                        format_time(entry.start())
                    )?;
                }
                writeln!(writer, "Stop it first with `bb sleep end`.")?;
                Ok(false)
            }
        },

        SleepAction::End => {
            let Some((_, entry)) = tracker.open_sleep() else {
                writeln!(writer, "No open sleep session.")?;
                return Ok(false);
            };
            let id = entry.id.clone();
            match tracker.end_sleep(&id, now) {
                Some(minutes) => {
                    writeln!(writer, "Slept {} ({id}).", format_duration(minutes))?;
                    Ok(true)
                }
                None => {
                    writeln!(writer, "No open sleep session.")?;
                    Ok(false)
                }
            }
        }

        SleepAction::Add {
            hours,
            minutes,
            note,
        } => {
            let total = hours * 60 + minutes;
            if total == 0 {
                anyhow::bail!("give the elapsed time with --hours and/or --minutes");
            }
            match tracker.add_sleep_manual(now, total, note) {
                Some(id) => {
                    writeln!(
                        writer,
                        "Logged {} of sleep under {} ({id}).",
                        format_duration(total),
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
    }
}

#[cfg(test)]
mod tests {
    use bb_core::Gender;
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, h, m, 0).unwrap()
    }

    fn tracker_with_child() -> Tracker {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        tracker
    }

    #[test]
    fn timer_start_and_end_round_trip() {
        let mut tracker = tracker_with_child();

        let mut output = Vec::new();
        assert!(run(&mut output, &mut tracker, SleepAction::Start { note: None }, at(20, 0)).unwrap());

        let mut output = Vec::new();
        assert!(run(&mut output, &mut tracker, SleepAction::End, at(21, 30)).unwrap());

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Slept 1h 30m"));
        assert!(tracker.open_sleep().is_none());
    }

    #[test]
    fn second_start_points_at_the_open_session() {
        let mut tracker = tracker_with_child();
        tracker.start_sleep(at(20, 0), None).unwrap();

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            SleepAction::Start { note: None },
            at(20, 30),
        )
        .unwrap();

        assert!(!changed);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("already open"));
        assert!(output.contains("bb sleep end"));
    }

    #[test]
    fn end_without_a_session_is_a_no_op() {
        let mut tracker = tracker_with_child();

        let mut output = Vec::new();
        let changed = run(&mut output, &mut tracker, SleepAction::End, at(21, 0)).unwrap();

        assert!(!changed);
        assert!(String::from_utf8(output).unwrap().contains("No open sleep session"));
    }

    #[test]
    fn manual_entry_combines_hours_and_minutes() {
        let mut tracker = tracker_with_child();

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            SleepAction::Add {
                hours: 1,
                minutes: 30,
                note: None,
            },
            at(14, 0),
        )
        .unwrap();

        assert!(changed);
        let day = tracker.day(today());
        assert_eq!(day.sleeps[0].duration_minutes(), Some(90));
        assert!(tracker.open_sleep().is_none());
    }

    #[test]
    fn manual_entry_requires_a_duration() {
        let mut tracker = tracker_with_child();

        let mut output = Vec::new();
        let result = run(
            &mut output,
            &mut tracker,
            SleepAction::Add {
                hours: 0,
                minutes: 0,
                note: None,
            },
            at(14, 0),
        );
        assert!(result.is_err());
    }
}
