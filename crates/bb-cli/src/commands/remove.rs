//! Entry removal, scoped to the selected day.

use std::io::Write;

use anyhow::Result;

use bb_core::{EntryId, Tracker};

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    category: &str,
    id: &str,
) -> Result<bool> {
    let id = EntryId::new(id)?;
    let removed = match category {
        "pee" => tracker.remove_pee(&id),
        "poop" => tracker.remove_poop(&id),
        "feeding" => tracker.remove_feeding(&id),
        "diaper" => tracker.remove_diaper(&id),
        "sleep" => tracker.remove_sleep(&id),
        "colic" => tracker.remove_colic(&id),
        "note" => tracker.remove_note(&id),
        other => anyhow::bail!(
            "unknown category: {other} (expected pee, poop, feeding, diaper, sleep, colic, or note)"
        ),
    };

    if removed {
        writeln!(writer, "Removed {category} entry {id}.")?;
    } else {
        writeln!(
            writer,
            "No {category} entry {id} under {}.",
            tracker.selected_date()
        )?;
        // Entries only come off the day they were filed under
        writeln!(
            writer,
            "Entries are removed from the selected day; check `bb date`."
        )?;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use bb_core::Gender;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    fn tracker_with_pee() -> (Tracker, EntryId) {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let id = tracker.add_pee(now(), None).unwrap();
        (tracker, id)
    }

    #[test]
    fn removes_an_entry_by_id() {
        let (mut tracker, id) = tracker_with_pee();
        let mut output = Vec::new();

        let changed = run(&mut output, &mut tracker, "pee", id.as_str()).unwrap();

        assert!(changed);
        assert!(tracker.day(today()).pee.is_empty());
    }

    #[test]
    fn missing_entry_is_reported_with_the_selected_day() {
        let (mut tracker, id) = tracker_with_pee();
        tracker.select_date(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());

        let mut output = Vec::new();
        let changed = run(&mut output, &mut tracker, "pee", id.as_str()).unwrap();

        assert!(!changed);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("2026-03-15"));
        assert!(output.contains("selected day"));
    }

    #[test]
    fn unknown_category_is_an_error() {
        let (mut tracker, id) = tracker_with_pee();
        let mut output = Vec::new();

        let result = run(&mut output, &mut tracker, "bathtime", id.as_str());
        assert!(result.is_err());
    }
}
