//! Seed data and the static educational catalogue.

use chrono::NaiveDate;

use crate::models::{Reminder, ReminderType};

/// A titled list of short pieces of advice.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub title: &'static str,
    pub category: ReminderType,
    pub points: &'static [&'static str],
}

/// A one-line tip with a heading.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const QUICK_TIPS: &[Tip] = &[
    Tip {
        title: "Use 2FA",
        body: "Two-factor authentication adds an extra layer of protection",
    },
    Tip {
        title: "Keep software up to date",
        body: "Updates close security vulnerabilities",
    },
];

pub const LEARNING_TOPICS: &[Topic] = &[
    Topic {
        title: "How to spot phishing",
        category: ReminderType::Security,
        points: &[
            "Check the sender's address",
            "Don't follow suspicious links",
            "Banks never ask for passwords by email",
            "Watch for grammar mistakes",
        ],
    },
    Topic {
        title: "Cleaning up devices",
        category: ReminderType::Cleanup,
        points: &[
            "Remove apps you no longer use",
            "Clear the browser cache once a month",
            "Review programs that run at startup",
            "Use cloud storage",
        ],
    },
    Topic {
        title: "Password safety",
        category: ReminderType::Password,
        points: &[
            "Use a unique password for every service",
            "At least 12 characters of mixed types",
            "Turn on two-factor authentication",
            "Change passwords every 3-6 months",
        ],
    },
    Topic {
        title: "Disposing of devices",
        category: ReminderType::Device,
        points: &[
            "Do a full factory reset",
            "Remove the SIM card and memory card",
            "Sign out of every account",
            "Hand the device in at a dedicated collection point",
        ],
    },
];

pub const RECOMMENDATION_OF_THE_DAY: &str = "Turn on automatic updates on all of your devices. \
It is the simplest way to stay protected from known vulnerabilities.";

pub const PASSWORD_STORAGE_HINT: &str =
    "Store the password somewhere safe. A password manager is recommended.";

/// Reminders every new session starts with.
pub fn sample_reminders() -> Vec<Reminder> {
    vec![
        reminder(1, "Update Gmail password", "Last changed 3 months ago", (2025, 10, 20), ReminderType::Password),
        reminder(2, "Clear browser cache", "Recommended once a month", (2025, 10, 18), ReminderType::Cleanup),
        reminder(3, "Review privacy settings", "Social networks and apps", (2025, 10, 22), ReminderType::Security),
    ]
}

fn reminder(id: u64, title: &str, description: &str, (y, m, d): (i32, u32, u32), kind: ReminderType) -> Reminder {
    Reminder {
        id,
        title: title.to_string(),
        description: description.to_string(),
        due_date: NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date"),
        completed: false,
        kind,
    }
}

/// Human label for a category.
pub fn category_label(kind: ReminderType) -> &'static str {
    match kind {
        ReminderType::Password => "Passwords",
        ReminderType::Cleanup => "Cleanup",
        ReminderType::Security => "Security",
        ReminderType::Device => "Devices",
    }
}

/// Short verdict shown under the security score.
pub fn score_verdict(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent security level!"
    } else if score >= 50 {
        "Room for improvement"
    } else {
        "Needs attention"
    }
}
