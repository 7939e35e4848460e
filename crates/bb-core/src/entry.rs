//! Event entries recorded against a (child, day) partition.
//!
//! Entries are organized by the calendar day the caregiver attributes them
//! to, not strictly by their own timestamp: logging "now" while viewing a
//! past day files the entry under that past day. This is intentional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ColicLevel, EntryId, ValidationError};

/// Stool color observed at a bowel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoopColor {
    Yellow,
    Green,
    Brown,
    Black,
}

impl PoopColor {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Black => "black",
        }
    }
}

impl std::fmt::Display for PoopColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PoopColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            "brown" => Ok(Self::Brown),
            "black" => Ok(Self::Black),
            _ => Err(ValidationError::Invalid {
                field: "stool color",
                value: s.to_string(),
            }),
        }
    }
}

/// Stool consistency observed at a bowel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoopConsistency {
    Runny,
    Soft,
    Firm,
}

impl PoopConsistency {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Runny => "runny",
            Self::Soft => "soft",
            Self::Firm => "firm",
        }
    }
}

impl std::fmt::Display for PoopConsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PoopConsistency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "runny" => Ok(Self::Runny),
            "soft" => Ok(Self::Soft),
            "firm" => Ok(Self::Firm),
            _ => Err(ValidationError::Invalid {
                field: "stool consistency",
                value: s.to_string(),
            }),
        }
    }
}

/// Which breast a feeding was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreastSide {
    Left,
    Right,
}

impl BreastSide {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for BreastSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BreastSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ValidationError::Invalid {
                field: "breast side",
                value: s.to_string(),
            }),
        }
    }
}

/// What a diaper change found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaperKind {
    Wet,
    Soiled,
    Both,
    Dry,
}

impl DiaperKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wet => "wet",
            Self::Soiled => "soiled",
            Self::Both => "both",
            Self::Dry => "dry",
        }
    }
}

impl std::fmt::Display for DiaperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DiaperKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wet" => Ok(Self::Wet),
            "soiled" => Ok(Self::Soiled),
            "both" => Ok(Self::Both),
            "dry" => Ok(Self::Dry),
            _ => Err(ValidationError::Invalid {
                field: "diaper kind",
                value: s.to_string(),
            }),
        }
    }
}

/// A urination entry. The simplest category: one tap, one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeeEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A bowel movement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoopEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PoopColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<PoopConsistency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A breastfeeding entry with caregiver-entered duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    pub side: BreastSide,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A diaper change entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaperEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    pub kind: DiaperKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A colic/fussiness rating entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColicEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    pub level: ColicLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A free-text note entry. Not a tracking category, but stored identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// The state of one sleep session.
///
/// Making open/closed a tagged variant (rather than an optional end field)
/// lets the store enforce the at-most-one-open-session-per-child invariant
/// without scanning for a field convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SleepSession {
    /// Timer running; no end recorded yet.
    Open { start: DateTime<Utc> },
    /// Finished session. `duration_minutes` is derived, never caregiver-entered.
    Closed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_minutes: u32,
    },
}

impl SleepSession {
    /// Closes the interval \[`start`, `end`\], deriving whole minutes with
    /// half-up rounding. An end before the start yields zero minutes.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn closed_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let ms = (end - start).num_milliseconds();
        let duration_minutes = (ms as f64 / 60_000.0).round().max(0.0) as u32;
        Self::Closed {
            start,
            end,
            duration_minutes,
        }
    }
}

/// A sleep entry: the only category spanning two points in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub session: SleepSession,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SleepEntry {
    /// Whether the session is still running.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.session, SleepSession::Open { .. })
    }

    /// When the session started.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        match self.session {
            SleepSession::Open { start } | SleepSession::Closed { start, .. } => start,
        }
    }

    /// Derived duration, or `None` while the session is open.
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<u32> {
        match self.session {
            SleepSession::Open { .. } => None,
            SleepSession::Closed {
                duration_minutes, ..
            } => Some(duration_minutes),
        }
    }
}
