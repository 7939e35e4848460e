//! Appointment commands for the active child.

use std::io::Write;

use anyhow::Result;

use bb_core::{AppointmentId, NewAppointment, Tracker, sorted_for_display};

use super::NO_ACTIVE_CHILD;
use crate::ApptAction;

pub fn run<W: Write>(writer: &mut W, tracker: &mut Tracker, action: ApptAction) -> Result<bool> {
    match action {
        ApptAction::Add {
            title,
            date,
            time,
            doctor,
            location,
            note,
        } => {
            let added = tracker.add_appointment(NewAppointment {
                title: title.clone(),
                date,
                time,
                doctor,
                location,
                note,
            });
            match added {
                Some(id) => {
                    writeln!(writer, "Scheduled \"{title}\" on {date} ({id}).")?;
                    Ok(true)
                }
                None => {
                    writeln!(writer, "{NO_ACTIVE_CHILD}")?;
                    Ok(false)
                }
            }
        }

        ApptAction::List => {
            let appointments = tracker.appointments();
            if appointments.is_empty() {
                writeln!(writer, "No appointments.")?;
                return Ok(false);
            }
            for appointment in sorted_for_display(appointments) {
                let check = if appointment.completed { "x" } else { " " };
                let time = appointment
                    .time
                    .map(|t| format!(" {}", t.format("%H:%M")))
                    .unwrap_or_default();
                let mut details = Vec::new();
                if let Some(doctor) = &appointment.doctor {
                    details.push(doctor.clone());
                }
                if let Some(location) = &appointment.location {
                    details.push(location.clone());
                }
                let details = if details.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", details.join(", "))
                };
                writeln!(
                    writer,
                    "[{check}] {}{time}  {}{details}  {}",
                    appointment.date, appointment.title, appointment.id
                )?;
            }
            Ok(false)
        }

        ApptAction::Done { id } => {
            let id = AppointmentId::new(id)?;
            let toggled = tracker.toggle_appointment(&id);
            if toggled {
                writeln!(writer, "Toggled {id}.")?;
            } else {
                writeln!(writer, "No appointment {id}.")?;
            }
            Ok(toggled)
        }

        ApptAction::Remove { id } => {
            let id = AppointmentId::new(id)?;
            let removed = tracker.remove_appointment(&id);
            if removed {
                writeln!(writer, "Removed {id}.")?;
            } else {
                writeln!(writer, "No appointment {id}.")?;
            }
            Ok(removed)
        }
    }
}

#[cfg(test)]
mod tests {
    use bb_core::Gender;
    use chrono::NaiveDate;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn tracker_with_child() -> Tracker {
        let mut tracker = Tracker::new(today());
        tracker.add_child("Mina", Gender::Girl, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        tracker
    }

    #[test]
    fn add_then_list_shows_the_appointment() {
        let mut tracker = tracker_with_child();

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            ApptAction::Add {
                title: "two-month checkup".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 5, 11).unwrap(),
                time: None,
                doctor: Some("Dr. Okafor".to_string()),
                location: None,
                note: None,
            },
        )
        .unwrap();
        assert!(changed);

        let mut output = Vec::new();
        run(&mut output, &mut tracker, ApptAction::List).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("[ ] 2026-05-11  two-month checkup (Dr. Okafor)"));
    }

    #[test]
    fn done_toggles_the_checkbox() {
        let mut tracker = tracker_with_child();
        let id = tracker
            .add_appointment(NewAppointment {
                title: "checkup".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 5, 11).unwrap(),
                ..NewAppointment::default()
            })
            .unwrap();

        let mut output = Vec::new();
        run(
            &mut output,
            &mut tracker,
            ApptAction::Done {
                id: id.as_str().to_string(),
            },
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &mut tracker, ApptAction::List).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("[x]"));
    }

    #[test]
    fn without_a_child_add_is_a_hint() {
        let mut tracker = Tracker::new(today());

        let mut output = Vec::new();
        let changed = run(
            &mut output,
            &mut tracker,
            ApptAction::Add {
                title: "checkup".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 5, 11).unwrap(),
                time: None,
                doctor: None,
                location: None,
                note: None,
            },
        )
        .unwrap();

        assert!(!changed);
        assert!(String::from_utf8(output).unwrap().contains("No active child"));
    }
}
