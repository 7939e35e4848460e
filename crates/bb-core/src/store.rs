//! The tracker store: profiles, per-day event logs, sleep sessions, and
//! appointments behind one explicitly-constructed mutable aggregate.
//!
//! Ownership is hierarchical: the store owns per-child log maps, which own
//! day logs, which own entries. There is no global instance; callers build
//! a [`Tracker`] (usually from a persisted snapshot) and thread it through.
//!
//! # Silent no-ops
//!
//! Invalid targets (unknown id, no active child, absent day partition) do
//! not raise errors. Adders return `None` and removers return `false`;
//! absence of an effect is the only signal. The one enforced invariant is
//! the sleep session machine, which rejects a second concurrent open
//! session with [`SleepError::SessionAlreadyOpen`].

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::appointment::{Appointment, AppointmentUpdate, NewAppointment};
use crate::entry::{
    BreastSide, ColicEntry, DiaperEntry, DiaperKind, FeedingEntry, NoteEntry, PeeEntry,
    PoopColor, PoopConsistency, PoopEntry, SleepEntry, SleepSession,
};
use crate::log::DailyLog;
use crate::profile::{ChildProfile, Gender, ProfileUpdate};
use crate::types::{AppointmentId, ChildId, ColicLevel, EntryId};

/// Errors from the sleep session state machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SleepError {
    /// No child is active, so there is nowhere to record the session.
    #[error("no active child")]
    NoActiveChild,
    /// The active child already has an open session, possibly under a
    /// different day than the one currently selected.
    #[error("a sleep session is already open")]
    SessionAlreadyOpen,
}

/// The whole tracked state for one device: every profile, every day log,
/// every appointment, plus the ambient selection (active child, selected
/// date) that scopes mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    children: Vec<ChildProfile>,
    active_child: Option<ChildId>,
    selected_date: NaiveDate,
    #[serde(default)]
    logs: HashMap<ChildId, BTreeMap<NaiveDate, DailyLog>>,
    #[serde(default)]
    appointments: HashMap<ChildId, Vec<Appointment>>,
}

impl Tracker {
    /// Creates an empty tracker with `today` selected.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            children: Vec::new(),
            active_child: None,
            selected_date: today,
            logs: HashMap::new(),
            appointments: HashMap::new(),
        }
    }

    // ========== Profile registry ==========

    /// Adds a profile and returns its fresh ID. When the registry was
    /// empty the new profile becomes active.
    pub fn add_child(
        &mut self,
        name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
    ) -> ChildId {
        let profile = ChildProfile::new(name, gender, date_of_birth);
        let id = profile.id.clone();
        if self.children.is_empty() {
            self.active_child = Some(id.clone());
        }
        self.children.push(profile);
        tracing::debug!(%id, "added child profile");
        id
    }

    /// Merges `update` into the matching profile. No-op on unknown id;
    /// returns whether a profile matched.
    pub fn update_child(&mut self, id: &ChildId, update: ProfileUpdate) -> bool {
        match self.children.iter_mut().find(|c| c.id == *id) {
            Some(profile) => {
                profile.apply(update);
                true
            }
            None => false,
        }
    }

    /// Removes a profile along with its logs and appointments. If it was
    /// active, the first remaining profile (if any) becomes active.
    /// No-op on unknown id; returns whether a profile matched.
    pub fn remove_child(&mut self, id: &ChildId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c.id != *id);
        if self.children.len() == before {
            return false;
        }
        self.logs.remove(id);
        self.appointments.remove(id);
        if self.active_child.as_ref() == Some(id) {
            self.active_child = self.children.first().map(|c| c.id.clone());
        }
        tracing::debug!(%id, "removed child profile");
        true
    }

    /// Makes the matching profile active. No-op on unknown id; returns
    /// whether a profile matched.
    pub fn set_active_child(&mut self, id: &ChildId) -> bool {
        if self.children.iter().any(|c| c.id == *id) {
            self.active_child = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// The active profile, or `None` when the registry is empty or nothing
    /// is selected.
    #[must_use]
    pub fn active_child(&self) -> Option<&ChildProfile> {
        let id = self.active_child.as_ref()?;
        self.children.iter().find(|c| c.id == *id)
    }

    /// All profiles in registry order.
    #[must_use]
    pub fn children(&self) -> &[ChildProfile] {
        &self.children
    }

    // ========== Date selection ==========

    /// The calendar day mutations are currently attributed to.
    #[must_use]
    pub const fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Navigates to another calendar day.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    // ========== Event log ==========

    /// Records a urination at `now` under the selected day.
    pub fn add_pee(&mut self, now: DateTime<Utc>, note: Option<String>) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = PeeEntry {
            id: id.clone(),
            timestamp: now,
            note,
        };
        self.selected_day_or_create()?.pee.push(entry);
        Some(id)
    }

    /// Records a bowel movement at `now` under the selected day.
    pub fn add_poop(
        &mut self,
        now: DateTime<Utc>,
        color: Option<PoopColor>,
        consistency: Option<PoopConsistency>,
        note: Option<String>,
    ) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = PoopEntry {
            id: id.clone(),
            timestamp: now,
            color,
            consistency,
            note,
        };
        self.selected_day_or_create()?.poop.push(entry);
        Some(id)
    }

    /// Records a feeding at `now` under the selected day.
    pub fn add_feeding(
        &mut self,
        now: DateTime<Utc>,
        side: BreastSide,
        duration_minutes: u32,
        note: Option<String>,
    ) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = FeedingEntry {
            id: id.clone(),
            timestamp: now,
            side,
            duration_minutes,
            note,
        };
        self.selected_day_or_create()?.feedings.push(entry);
        Some(id)
    }

    /// Records a diaper change at `now` under the selected day.
    pub fn add_diaper(
        &mut self,
        now: DateTime<Utc>,
        kind: DiaperKind,
        note: Option<String>,
    ) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = DiaperEntry {
            id: id.clone(),
            timestamp: now,
            kind,
            note,
        };
        self.selected_day_or_create()?.diaper_changes.push(entry);
        Some(id)
    }

    /// Records a colic rating at `now` under the selected day.
    pub fn add_colic(
        &mut self,
        now: DateTime<Utc>,
        level: ColicLevel,
        note: Option<String>,
    ) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = ColicEntry {
            id: id.clone(),
            timestamp: now,
            level,
            note,
        };
        self.selected_day_or_create()?.colic.push(entry);
        Some(id)
    }

    /// Records a free-text note at `now` under the selected day.
    pub fn add_note(&mut self, now: DateTime<Utc>, text: String) -> Option<EntryId> {
        let id = EntryId::generate();
        let entry = NoteEntry {
            id: id.clone(),
            timestamp: now,
            text,
        };
        self.selected_day_or_create()?.notes.push(entry);
        Some(id)
    }

    /// Removes a pee entry from the selected day. Returns whether anything
    /// was removed; an id living under another day is left untouched.
    pub fn remove_pee(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.pee, |e| &e.id, id))
    }

    /// Removes a poop entry from the selected day.
    pub fn remove_poop(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.poop, |e| &e.id, id))
    }

    /// Removes a feeding entry from the selected day.
    pub fn remove_feeding(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.feedings, |e| &e.id, id))
    }

    /// Removes a diaper change entry from the selected day.
    pub fn remove_diaper(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| {
            retain_without(&mut day.diaper_changes, |e| &e.id, id)
        })
    }

    /// Removes a sleep entry (open or closed) from the selected day.
    pub fn remove_sleep(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.sleeps, |e| &e.id, id))
    }

    /// Removes a colic entry from the selected day.
    pub fn remove_colic(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.colic, |e| &e.id, id))
    }

    /// Removes a note entry from the selected day.
    pub fn remove_note(&mut self, id: &EntryId) -> bool {
        self.remove_from_selected_day(|day| retain_without(&mut day.notes, |e| &e.id, id))
    }

    /// The active child's log for `date`, synthesized empty when absent or
    /// when no child is active. Read-only; never creates the partition.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> DailyLog {
        self.active_child
            .as_ref()
            .and_then(|child| self.logs.get(child))
            .and_then(|days| days.get(&date))
            .cloned()
            .unwrap_or_else(|| DailyLog::empty(date))
    }

    /// The active child's full date → log mapping, the raw input to the
    /// aggregation engine. `None` when no child is active or nothing has
    /// been logged yet.
    #[must_use]
    pub fn child_logs(&self) -> Option<&BTreeMap<NaiveDate, DailyLog>> {
        self.logs.get(self.active_child.as_ref()?)
    }

    // ========== Sleep sessions ==========

    /// Starts the sleep timer under the selected day.
    ///
    /// At most one session per child may be open at a time, tracked across
    /// all of the child's days since a session may span midnight.
    pub fn start_sleep(
        &mut self,
        now: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<EntryId, SleepError> {
        if self.active_child.is_none() {
            return Err(SleepError::NoActiveChild);
        }
        if self.open_sleep().is_some() {
            return Err(SleepError::SessionAlreadyOpen);
        }
        let id = EntryId::generate();
        let entry = SleepEntry {
            id: id.clone(),
            session: SleepSession::Open { start: now },
            note,
        };
        // Checked above; the partition is created on the way in.
        self.selected_day_or_create()
            .ok_or(SleepError::NoActiveChild)?
            .sleeps
            .push(entry);
        tracing::debug!(%id, "sleep timer started");
        Ok(id)
    }

    /// Stops the open session with this id, wherever it lives in the
    /// active child's logs, deriving whole minutes with half-up rounding.
    /// Returns the derived duration, or `None` when the id is unknown or
    /// the session is already closed.
    pub fn end_sleep(&mut self, id: &EntryId, now: DateTime<Utc>) -> Option<u32> {
        let child = self.active_child.clone()?;
        let days = self.logs.get_mut(&child)?;
        for day in days.values_mut() {
            let Some(entry) = day.sleeps.iter_mut().find(|e| e.id == *id) else {
                continue;
            };
            let SleepSession::Open { start } = entry.session else {
                return None;
            };
            entry.session = SleepSession::closed_between(start, now);
            let minutes = entry.duration_minutes();
            tracing::debug!(%id, ?minutes, "sleep timer stopped");
            return minutes;
        }
        None
    }

    /// Records an already-elapsed sleep of `minutes` ending at `now`. The
    /// manual-entry path: stored closed, never transitions through open.
    pub fn add_sleep_manual(
        &mut self,
        now: DateTime<Utc>,
        minutes: u32,
        note: Option<String>,
    ) -> Option<EntryId> {
        let id = EntryId::generate();
        let start = now - Duration::minutes(i64::from(minutes));
        let entry = SleepEntry {
            id: id.clone(),
            session: SleepSession::Closed {
                start,
                end: now,
                duration_minutes: minutes,
            },
            note,
        };
        self.selected_day_or_create()?.sleeps.push(entry);
        Some(id)
    }

    /// The active child's open sleep session, if any, with the day it was
    /// filed under.
    #[must_use]
    pub fn open_sleep(&self) -> Option<(NaiveDate, &SleepEntry)> {
        let child = self.active_child.as_ref()?;
        let days = self.logs.get(child)?;
        days.iter()
            .find_map(|(date, day)| day.open_sleep().map(|entry| (*date, entry)))
    }

    // ========== Appointments ==========

    /// Adds an appointment for the active child. `None` when no child is
    /// active.
    pub fn add_appointment(&mut self, fields: NewAppointment) -> Option<AppointmentId> {
        let child = self.active_child.clone()?;
        let appointment = Appointment::from_new(fields);
        let id = appointment.id.clone();
        self.appointments.entry(child).or_default().push(appointment);
        Some(id)
    }

    /// Merges `update` into the matching appointment of the active child.
    pub fn update_appointment(&mut self, id: &AppointmentId, update: AppointmentUpdate) -> bool {
        self.active_appointments_mut()
            .and_then(|appts| appts.iter_mut().find(|a| a.id == *id))
            .map(|a| a.apply(update))
            .is_some()
    }

    /// Removes the matching appointment of the active child.
    pub fn remove_appointment(&mut self, id: &AppointmentId) -> bool {
        self.active_appointments_mut().is_some_and(|appts| {
            let before = appts.len();
            appts.retain(|a| a.id != *id);
            appts.len() != before
        })
    }

    /// Flips the completed flag of the matching appointment.
    pub fn toggle_appointment(&mut self, id: &AppointmentId) -> bool {
        self.active_appointments_mut()
            .and_then(|appts| appts.iter_mut().find(|a| a.id == *id))
            .map(|a| a.completed = !a.completed)
            .is_some()
    }

    /// The active child's appointments in stored order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        self.active_child
            .as_ref()
            .and_then(|child| self.appointments.get(child))
            .map_or(&[], Vec::as_slice)
    }

    // ========== Internals ==========

    /// The (active child, selected date) partition, created lazily.
    /// `None` when no child is active.
    fn selected_day_or_create(&mut self) -> Option<&mut DailyLog> {
        let child = self.active_child.clone()?;
        let date = self.selected_date;
        Some(
            self.logs
                .entry(child)
                .or_default()
                .entry(date)
                .or_insert_with(|| DailyLog::empty(date)),
        )
    }

    /// Runs `f` against the selected day if it exists. Removal must not
    /// create the partition, so this never inserts.
    fn remove_from_selected_day(&mut self, f: impl FnOnce(&mut DailyLog) -> bool) -> bool {
        let Some(child) = self.active_child.as_ref() else {
            return false;
        };
        self.logs
            .get_mut(child)
            .and_then(|days| days.get_mut(&self.selected_date))
            .is_some_and(f)
    }

    fn active_appointments_mut(&mut self) -> Option<&mut Vec<Appointment>> {
        self.appointments.get_mut(self.active_child.as_ref()?)
    }
}

/// Retains everything but the element whose key matches `id`; reports
/// whether anything was dropped.
fn retain_without<T, K: PartialEq>(
    entries: &mut Vec<T>,
    key: impl Fn(&T) -> &K,
    id: &K,
) -> bool {
    let before = entries.len();
    entries.retain(|e| key(e) != id);
    entries.len() != before
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, h, m, 0).unwrap()
    }

    fn tracker_with_child() -> Tracker {
        let mut tracker = Tracker::new(date(2026, 3, 14));
        tracker.add_child("Mina", Gender::Girl, date(2024, 1, 1));
        tracker
    }

    #[test]
    fn first_child_becomes_active() {
        let mut tracker = Tracker::new(date(2026, 3, 14));
        assert!(tracker.active_child().is_none());

        let first = tracker.add_child("Mina", Gender::Girl, date(2024, 1, 1));
        let _second = tracker.add_child("Theo", Gender::Boy, date(2025, 6, 2));

        assert_eq!(tracker.active_child().unwrap().id, first);
    }

    #[test]
    fn adds_preserve_order_with_distinct_ids() {
        let mut tracker = tracker_with_child();
        let a = tracker.add_pee(at(8, 0), None).unwrap();
        let b = tracker.add_pee(at(8, 5), Some("small".to_string())).unwrap();
        let c = tracker.add_pee(at(8, 10), None).unwrap();

        let day = tracker.day(date(2026, 3, 14));
        let ids: Vec<&EntryId> = day.pee.iter().map(|e| &e.id).collect();
        assert_eq!(ids, vec![&a, &b, &c]);
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn adds_are_no_ops_without_active_child() {
        let mut tracker = Tracker::new(date(2026, 3, 14));
        assert!(tracker.add_pee(at(8, 0), None).is_none());
        assert!(tracker.add_feeding(at(8, 0), BreastSide::Left, 10, None).is_none());
        assert!(tracker.add_note(at(8, 0), "hi".to_string()).is_none());
        assert!(tracker.day(date(2026, 3, 14)).is_empty());
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let mut tracker = tracker_with_child();
        let keep = tracker.add_diaper(at(9, 0), DiaperKind::Wet, None).unwrap();
        let drop = tracker.add_diaper(at(9, 30), DiaperKind::Both, None).unwrap();

        assert!(tracker.remove_diaper(&drop));
        let day = tracker.day(date(2026, 3, 14));
        assert_eq!(day.diaper_changes.len(), 1);
        assert_eq!(day.diaper_changes[0].id, keep);

        // Unknown id: no-op
        assert!(!tracker.remove_diaper(&drop));
        assert_eq!(tracker.day(date(2026, 3, 14)).diaper_changes.len(), 1);
    }

    #[test]
    fn remove_is_scoped_to_the_selected_date() {
        let mut tracker = tracker_with_child();
        let id = tracker.add_pee(at(8, 0), None).unwrap();

        // Navigating away hides the entry from removal
        tracker.select_date(date(2026, 3, 15));
        assert!(!tracker.remove_pee(&id));

        tracker.select_date(date(2026, 3, 14));
        assert!(tracker.remove_pee(&id));
    }

    #[test]
    fn entries_file_under_the_selected_day_not_the_timestamp() {
        let mut tracker = tracker_with_child();
        tracker.select_date(date(2026, 3, 10));
        tracker.add_pee(at(8, 0), None).unwrap();

        assert_eq!(tracker.day(date(2026, 3, 10)).pee.len(), 1);
        assert!(tracker.day(date(2026, 3, 14)).pee.is_empty());
    }

    #[test]
    fn switching_children_isolates_logs() {
        let mut tracker = tracker_with_child();
        let theo = tracker.add_child("Theo", Gender::Boy, date(2025, 6, 2));
        tracker.add_pee(at(8, 0), None).unwrap();

        tracker.set_active_child(&theo);
        assert!(tracker.day(date(2026, 3, 14)).pee.is_empty());

        let mina = tracker.children()[0].id.clone();
        tracker.set_active_child(&mina);
        assert_eq!(tracker.day(date(2026, 3, 14)).pee.len(), 1);
    }

    #[test]
    fn removing_active_child_reassigns_to_first_remaining() {
        let mut tracker = tracker_with_child();
        let mina = tracker.children()[0].id.clone();
        let theo = tracker.add_child("Theo", Gender::Boy, date(2025, 6, 2));

        tracker.remove_child(&mina);
        assert_eq!(tracker.active_child().unwrap().id, theo);

        tracker.remove_child(&theo);
        assert!(tracker.active_child().is_none());

        // With no profile left, adds become no-ops again
        assert!(tracker.add_pee(at(8, 0), None).is_none());
    }

    #[test]
    fn removing_child_drops_its_logs_and_appointments() {
        let mut tracker = tracker_with_child();
        let mina = tracker.children()[0].id.clone();
        tracker.add_pee(at(8, 0), None).unwrap();
        tracker
            .add_appointment(NewAppointment {
                title: "checkup".to_string(),
                date: date(2026, 4, 1),
                ..NewAppointment::default()
            })
            .unwrap();

        tracker.remove_child(&mina);
        let back = tracker.add_child("Mina", Gender::Girl, date(2024, 1, 1));
        tracker.set_active_child(&back);
        assert!(tracker.day(date(2026, 3, 14)).is_empty());
        assert!(tracker.appointments().is_empty());
    }

    #[test]
    fn update_child_merges_fields() {
        let mut tracker = tracker_with_child();
        let id = tracker.children()[0].id.clone();
        tracker.update_child(
            &id,
            ProfileUpdate {
                name: Some("Mina Ray".to_string()),
                ..ProfileUpdate::default()
            },
        );
        assert_eq!(tracker.children()[0].name, "Mina Ray");

        // Unknown id: no-op
        tracker.update_child(
            &ChildId::generate(),
            ProfileUpdate {
                name: Some("ghost".to_string()),
                ..ProfileUpdate::default()
            },
        );
        assert_eq!(tracker.children().len(), 1);
    }

    // ========== Sleep sessions ==========

    #[test]
    fn sleep_timer_round_trip() {
        let mut tracker = tracker_with_child();
        let id = tracker.start_sleep(at(20, 0), None).unwrap();
        assert!(tracker.open_sleep().is_some());

        // 95 minutes later
        let minutes = tracker.end_sleep(&id, at(21, 35)).unwrap();
        assert_eq!(minutes, 95);
        assert!(tracker.open_sleep().is_none());

        let day = tracker.day(date(2026, 3, 14));
        assert_eq!(day.sleeps[0].duration_minutes(), Some(95));
    }

    #[test]
    fn second_open_session_is_rejected() {
        let mut tracker = tracker_with_child();
        tracker.start_sleep(at(20, 0), None).unwrap();

        let err = tracker.start_sleep(at(20, 30), None).unwrap_err();
        assert_eq!(err, SleepError::SessionAlreadyOpen);
        assert_eq!(tracker.day(date(2026, 3, 14)).sleeps.len(), 1);
    }

    #[test]
    fn open_session_blocks_across_selected_dates() {
        let mut tracker = tracker_with_child();
        tracker.start_sleep(at(23, 50), None).unwrap();

        // The invariant is per child, not per day
        tracker.select_date(date(2026, 3, 15));
        let err = tracker.start_sleep(at(0, 10), None).unwrap_err();
        assert_eq!(err, SleepError::SessionAlreadyOpen);
    }

    #[test]
    fn end_sleep_finds_sessions_under_other_days() {
        let mut tracker = tracker_with_child();
        let id = tracker.start_sleep(at(23, 50), None).unwrap();

        // Caregiver navigated past midnight before stopping the timer
        tracker.select_date(date(2026, 3, 15));
        let minutes = tracker.end_sleep(&id, at(0, 20) + Duration::days(1));
        assert!(minutes.is_some());
        assert!(tracker.open_sleep().is_none());
    }

    #[test]
    fn end_sleep_is_a_no_op_on_closed_or_unknown_sessions() {
        let mut tracker = tracker_with_child();
        let id = tracker.start_sleep(at(20, 0), None).unwrap();
        tracker.end_sleep(&id, at(21, 0)).unwrap();

        assert!(tracker.end_sleep(&id, at(22, 0)).is_none());
        assert!(tracker.end_sleep(&EntryId::generate(), at(22, 0)).is_none());
    }

    #[test]
    fn manual_sleep_entry_is_closed_from_the_start() {
        let mut tracker = tracker_with_child();
        tracker.add_sleep_manual(at(14, 0), 90, None).unwrap();

        assert!(tracker.open_sleep().is_none());
        let day = tracker.day(date(2026, 3, 14));
        assert_eq!(day.sleeps[0].duration_minutes(), Some(90));
        assert_eq!(day.sleeps[0].start(), at(12, 30));

        // A manual entry does not block the timer
        assert!(tracker.start_sleep(at(20, 0), None).is_ok());
    }

    #[test]
    fn start_sleep_without_child_reports_it() {
        let mut tracker = Tracker::new(date(2026, 3, 14));
        assert_eq!(
            tracker.start_sleep(at(20, 0), None).unwrap_err(),
            SleepError::NoActiveChild
        );
    }

    // ========== Appointments ==========

    #[test]
    fn appointment_lifecycle() {
        let mut tracker = tracker_with_child();
        let id = tracker
            .add_appointment(NewAppointment {
                title: "two-month checkup".to_string(),
                date: date(2026, 5, 11),
                ..NewAppointment::default()
            })
            .unwrap();

        assert!(!tracker.appointments()[0].completed);
        assert!(tracker.toggle_appointment(&id));
        assert!(tracker.appointments()[0].completed);
        assert!(tracker.toggle_appointment(&id));
        assert!(!tracker.appointments()[0].completed);

        assert!(tracker.update_appointment(
            &id,
            AppointmentUpdate {
                doctor: Some("Dr. Okafor".to_string()),
                ..AppointmentUpdate::default()
            },
        ));
        assert_eq!(tracker.appointments()[0].doctor.as_deref(), Some("Dr. Okafor"));

        assert!(tracker.remove_appointment(&id));
        assert!(tracker.appointments().is_empty());
        assert!(!tracker.remove_appointment(&id));
    }

    #[test]
    fn appointments_are_no_ops_without_active_child() {
        let mut tracker = Tracker::new(date(2026, 3, 14));
        let result = tracker.add_appointment(NewAppointment {
            title: "checkup".to_string(),
            date: date(2026, 4, 1),
            ..NewAppointment::default()
        });
        assert!(result.is_none());
        assert!(tracker.appointments().is_empty());
    }

    // ========== Serialization ==========

    #[test]
    fn tracker_serde_roundtrip_keeps_open_sessions() {
        let mut tracker = tracker_with_child();
        tracker.add_feeding(at(9, 0), BreastSide::Left, 12, None).unwrap();
        tracker.start_sleep(at(20, 0), None).unwrap();

        let json = serde_json::to_string(&tracker).unwrap();
        let parsed: Tracker = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, tracker);
        assert!(parsed.open_sleep().is_some());
    }
}
