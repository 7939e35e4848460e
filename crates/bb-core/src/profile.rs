//! Child profiles and the fixed theme palette.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{ChildId, ValidationError};

/// Checklist labels a fresh profile starts with.
pub const DEFAULT_CHECKLIST: &[&str] = &[
    "Vitamin D drops",
    "Tummy time",
    "Bath",
    "Temperature check",
    "Nail trim",
];

/// Gender of a tracked child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boy => "boy",
            Self::Girl => "girl",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boy" => Ok(Self::Boy),
            "girl" => Ok(Self::Girl),
            _ => Err(ValidationError::Invalid {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Color theme from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Pink,
    Blue,
    Green,
    Lavender,
    Mono,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Lavender => "lavender",
            Self::Mono => "mono",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "pink" => Ok(Self::Pink),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "lavender" => Ok(Self::Lavender),
            "mono" => Ok(Self::Mono),
            _ => Err(ValidationError::Invalid {
                field: "theme",
                value: s.to_string(),
            }),
        }
    }
}

/// One tracked child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: ChildId,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub theme: Theme,
    /// Checklist labels, unique and order-significant for display.
    #[serde(default = "default_checklist")]
    pub checklist_items: Vec<String>,
}

fn default_checklist() -> Vec<String> {
    DEFAULT_CHECKLIST.iter().map(ToString::to_string).collect()
}

impl ChildProfile {
    /// Creates a profile with a fresh ID and the built-in checklist.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender, date_of_birth: NaiveDate) -> Self {
        Self {
            id: ChildId::generate(),
            name: name.into(),
            gender,
            date_of_birth,
            theme: Theme::default(),
            checklist_items: default_checklist(),
        }
    }

    /// Merges the set fields of `update` into this profile.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(checklist_items) = update.checklist_items {
            self.checklist_items = checklist_items;
        }
    }
}

/// Partial field replacement for [`ChildProfile::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub theme: Option<Theme>,
    pub checklist_items: Option<Vec<String>>,
}

/// Renders an age like "12 days old", "3 months old", or "1y 2m old".
#[must_use]
pub fn format_age(date_of_birth: NaiveDate, today: NaiveDate) -> String {
    let mut months = i64::from(today.year() - date_of_birth.year()) * 12
        + (i64::from(today.month()) - i64::from(date_of_birth.month()));
    if today.day() < date_of_birth.day() {
        months -= 1;
    }
    let months = months.max(0);
    let years = months / 12;
    let months = months % 12;

    if years == 0 && months == 0 {
        let days = (today - date_of_birth).num_days().max(0);
        let plural = if days == 1 { "" } else { "s" };
        return format!("{days} day{plural} old");
    }
    if years == 0 {
        let plural = if months == 1 { "" } else { "s" };
        return format!("{months} month{plural} old");
    }
    if months == 0 {
        let plural = if years == 1 { "" } else { "s" };
        return format!("{years} year{plural} old");
    }
    format!("{years}y {months}m old")
}
