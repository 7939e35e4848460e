//! The per-(child, day) aggregate of category entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::{
    ColicEntry, DiaperEntry, FeedingEntry, NoteEntry, PeeEntry, PoopEntry, SleepEntry,
};

/// Everything logged for one child on one calendar day.
///
/// Created lazily on first write and never explicitly deleted; an absent
/// day is indistinguishable from an all-empty one on read. Sequences keep
/// insertion order.
///
/// Every sequence carries `#[serde(default)]` so snapshots written before a
/// category existed still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub pee: Vec<PeeEntry>,
    #[serde(default)]
    pub poop: Vec<PoopEntry>,
    #[serde(default)]
    pub feedings: Vec<FeedingEntry>,
    #[serde(default)]
    pub diaper_changes: Vec<DiaperEntry>,
    #[serde(default)]
    pub sleeps: Vec<SleepEntry>,
    #[serde(default)]
    pub colic: Vec<ColicEntry>,
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
}

impl DailyLog {
    /// Synthesizes the all-empty log for a day.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            pee: Vec::new(),
            poop: Vec::new(),
            feedings: Vec::new(),
            diaper_changes: Vec::new(),
            sleeps: Vec::new(),
            colic: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// True when no category holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pee.is_empty()
            && self.poop.is_empty()
            && self.feedings.is_empty()
            && self.diaper_changes.is_empty()
            && self.sleeps.is_empty()
            && self.colic.is_empty()
            && self.notes.is_empty()
    }

    /// The day's open sleep session, if one was started here.
    #[must_use]
    pub fn open_sleep(&self) -> Option<&SleepEntry> {
        self.sleeps.iter().find(|entry| entry.is_open())
    }
}
