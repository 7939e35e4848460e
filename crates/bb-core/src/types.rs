//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The colic level was out of range.
    #[error("colic level must be between 1 and 5, got {value}")]
    LevelOutOfRange { value: u8 },

    /// A string did not match any variant of a closed enumeration.
    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Generates a fresh random ID, unique system-wide.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated child profile identifier.
    ///
    /// Child IDs must be non-empty strings. Every profile is assigned a
    /// generated ID at creation and keeps it for its whole lifecycle.
    ChildId, "child ID"
);

define_string_id!(
    /// A validated event entry identifier.
    ///
    /// Entry IDs must be non-empty strings and are unique across every
    /// category and every child, not just within one day's log.
    EntryId, "entry ID"
);

define_string_id!(
    /// A validated appointment identifier.
    AppointmentId, "appointment ID"
);

/// A colic severity level in the range \[1, 5\].
///
/// Values are clamped during deserialization to be lenient with
/// hand-edited snapshot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColicLevel(u8);

impl ColicLevel {
    /// The mildest level (1).
    pub const MIN: Self = Self(1);

    /// The most severe level (5).
    pub const MAX: Self = Self(5);

    /// Creates a new level after validation.
    ///
    /// Returns an error if the value is outside \[1, 5\].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::LevelOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Creates a level, clamping to \[1, 5\].
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < 1 {
            Self(1)
        } else if value > 5 {
            Self(5)
        } else {
            Self(value)
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ColicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ColicLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColicLevel> for u8 {
    fn from(level: ColicLevel) -> Self {
        level.0
    }
}

impl Serialize for ColicLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColicLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        // Clamp on deserialization to be lenient with external data
        Ok(Self::clamped(value))
    }
}
