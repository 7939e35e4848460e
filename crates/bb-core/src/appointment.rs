//! Per-child medical appointments, independent of the daily log.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::AppointmentId;

/// A scheduled (or past) medical visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Fields for creating an appointment; the registry assigns the ID and
/// defaults `completed` to false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAppointment {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub doctor: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

/// Partial field replacement for an existing appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub doctor: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

impl Appointment {
    pub(crate) fn from_new(fields: NewAppointment) -> Self {
        Self {
            id: AppointmentId::generate(),
            title: fields.title,
            date: fields.date,
            time: fields.time,
            doctor: fields.doctor,
            location: fields.location,
            note: fields.note,
            completed: false,
        }
    }

    pub(crate) fn apply(&mut self, update: AppointmentUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = Some(time);
        }
        if let Some(doctor) = update.doctor {
            self.doctor = Some(doctor);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(note) = update.note {
            self.note = Some(note);
        }
    }
}

/// Orders appointments for display: incomplete ones ascending by date,
/// then completed ones in stored order.
#[must_use]
pub fn sorted_for_display(appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut upcoming: Vec<&Appointment> =
        appointments.iter().filter(|a| !a.completed).collect();
    upcoming.sort_by_key(|a| a.date);

    let completed = appointments.iter().filter(|a| a.completed);
    upcoming.extend(completed);
    upcoming
}
