use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a hygiene reminder.
///
/// Declaration order is the display order used by every breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Password,
    Cleanup,
    Security,
    Device,
}

impl ReminderType {
    pub const ALL: [ReminderType; 4] = [
        ReminderType::Password,
        ReminderType::Cleanup,
        ReminderType::Security,
        ReminderType::Device,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderType::Password => "password",
            ReminderType::Cleanup => "cleanup",
            ReminderType::Security => "security",
            ReminderType::Device => "device",
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single hygiene task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Unique identifier, stable for the session.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// The date the task should be done by.
    pub due_date: NaiveDate,
    /// Only ever changed through a toggle.
    #[serde(default)]
    pub completed: bool,
    /// Fixed at creation.
    #[serde(rename = "type")]
    pub kind: ReminderType,
}

/// Password generation settings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Number of characters to produce.
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordPolicy {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 32;
    pub const DEFAULT_LENGTH: usize = 16;

    /// Clamps a requested length into the interactive range.
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    /// True when at least one character class is enabled.
    pub fn has_any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            length: Self::DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Per-category completion counts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    pub completed: usize,
    pub total: usize,
    /// `0.0` when the category has no members.
    pub percentage: f64,
}
