use chrono::{Datelike, NaiveDate};
use hygiene::commands::*;
use hygiene::config::{parse_length, Config, LENGTH_ENV};
use hygiene::content::{sample_reminders, score_verdict, LEARNING_TOPICS};
use hygiene::models::{PasswordPolicy, ReminderType};
use hygiene::session::Session;
use std::collections::HashSet;
use std::env;

#[test]
fn test_sample_reminders() {
    let reminders = sample_reminders();
    let ids: HashSet<u64> = reminders.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), reminders.len());
    let kinds: Vec<ReminderType> = reminders.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![ReminderType::Password, ReminderType::Cleanup, ReminderType::Security]);
    assert!(reminders.iter().all(|r| !r.completed));
}

#[test]
fn test_sample_reminder_dates() {
    let dates: Vec<NaiveDate> = sample_reminders().iter().map(|r| r.due_date).collect();
    assert!(dates.iter().all(|d| d.year() == 2025));
    assert_eq!(dates[1], NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
}

#[test]
fn test_learning_topics_cover_every_category() {
    let kinds: HashSet<ReminderType> = LEARNING_TOPICS.iter().map(|t| t.category).collect();
    assert_eq!(kinds.len(), ReminderType::ALL.len());
}

#[test]
fn test_score_verdict_thresholds() {
    assert_eq!(score_verdict(100), "Excellent security level!");
    assert_eq!(score_verdict(80), "Excellent security level!");
    assert_eq!(score_verdict(79), "Room for improvement");
    assert_eq!(score_verdict(50), "Room for improvement");
    assert_eq!(score_verdict(33), "Needs attention");
}

#[test]
fn test_apply_toggles_and_report() {
    let mut session = Session::default();
    apply_toggles(&mut session, &[2, 99]);

    let report = DashboardReport::from_session(&session);
    assert_eq!(report.score, 33);
    assert_eq!(report.completed, 1);
    assert_eq!(report.total, 3);
    assert_eq!(report.active, 2);
    assert_eq!(report.categories[&ReminderType::Cleanup].completed, 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["categories"]["cleanup"]["percentage"], 100.0);
    assert_eq!(json["categories"]["device"]["total"], 0);
}

#[test]
fn test_time_left() {
    assert_eq!(time_left(0), "Today");
    assert_eq!(time_left(3), "3d");
    assert_eq!(time_left(-2), "2d overdue");
}

#[test]
fn test_reminders_table_contents() {
    let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
    let mut table = reminders_table(&sample_reminders(), today);
    table.set_width(240);
    let rendered = table.to_string();
    assert!(rendered.contains("Clear browser cache"));
    assert!(rendered.contains("1d overdue"));
    assert!(rendered.contains("Pending"));
}

#[test]
fn test_breakdown_table_contents() {
    let session = Session::default();
    let mut table = breakdown_table(&session.ledger().category_breakdown());
    table.set_width(240);
    let rendered = table.to_string();
    assert!(rendered.contains("Devices"));
    assert!(rendered.contains("0 of 0"));
}

#[test]
fn test_cmd_generate_rejects_empty_policy() {
    let policy = PasswordPolicy {
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: false,
        ..PasswordPolicy::default()
    };
    assert!(cmd_generate(&policy, 3).is_err());
}

#[test]
fn test_parse_length() {
    assert_eq!(parse_length("20"), Some(20));
    assert_eq!(parse_length(" 4 "), Some(8));
    assert_eq!(parse_length("64"), Some(32));
    assert_eq!(parse_length("long"), None);
}

#[test]
fn test_config_from_env() {
    env::set_var(LENGTH_ENV, "24");
    assert_eq!(Config::from_env().policy.length, 24);
    env::set_var(LENGTH_ENV, "nope");
    assert_eq!(Config::from_env().policy.length, PasswordPolicy::DEFAULT_LENGTH);
    env::remove_var(LENGTH_ENV);
    assert_eq!(Config::from_env(), Config::default());
}
