use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of an entry within one list.
///
/// Generated from the creation time in whole seconds since the Unix epoch.
/// Two entries created within the same second get the same id; the second
/// creation overwrites the first (see `ops::entry_ops::create_entry_at`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        EntryId(raw.into())
    }

    /// Id for an entry created at `at`, truncated to seconds
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        EntryId(at.timestamp().to_string())
    }

    pub fn now() -> Self {
        Self::from_timestamp(Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("priority {0} is outside 1-10")]
pub struct PriorityOutOfRange(pub i64);

/// Task priority, always within `MIN..=MAX`. Higher is more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Priority = Priority(5);

    pub fn new(value: i64) -> Result<Self, PriorityOutOfRange> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(PriorityOutOfRange(value))
        }
    }

    /// Nearest priority in range, for values read from a file
    pub fn clamped(value: i64) -> Self {
        Priority(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step more urgent, saturating at `MAX`
    pub fn raised(self) -> Self {
        Priority(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One step less urgent, saturating at `MIN`
    pub fn lowered(self) -> Self {
        Priority(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl TryFrom<i64> for Priority {
    type Error = PriorityOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single todo item as stored in the list file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Entry {
    pub const PLACEHOLDER_TEXT: &'static str = "Example Entry";

    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Entry {
            text: text.into(),
            priority,
            completed: false,
        }
    }

    /// The entry written into a list that has no content yet
    pub fn placeholder() -> Self {
        Entry::new(Self::PLACEHOLDER_TEXT, Priority::DEFAULT)
    }
}
