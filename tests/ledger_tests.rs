use chrono::NaiveDate;
use hygiene::ledger::{active_count, category_breakdown, overall_score, Ledger};
use hygiene::models::{CategoryStats, Reminder, ReminderType};

fn reminder(id: u64, kind: ReminderType, completed: bool) -> Reminder {
    Reminder {
        id,
        title: format!("Reminder {}", id),
        description: "Test".into(),
        due_date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
        completed,
        kind,
    }
}

fn seeded() -> Ledger {
    Ledger::new(vec![
        reminder(1, ReminderType::Password, false),
        reminder(2, ReminderType::Cleanup, false),
        reminder(3, ReminderType::Security, false),
    ])
}

#[test]
fn test_score_empty_is_zero() {
    assert_eq!(overall_score(&[]), 0);
    assert_eq!(active_count(&[]), 0);
}

#[test]
fn test_score_all_completed_is_100() {
    let reminders = vec![
        reminder(1, ReminderType::Password, true),
        reminder(2, ReminderType::Device, true),
    ];
    assert_eq!(overall_score(&reminders), 100);
}

#[test]
fn test_score_rounds() {
    let mut reminders = vec![
        reminder(1, ReminderType::Password, true),
        reminder(2, ReminderType::Cleanup, false),
        reminder(3, ReminderType::Security, false),
    ];
    assert_eq!(overall_score(&reminders), 33);
    reminders[1].completed = true;
    assert_eq!(overall_score(&reminders), 67);

    // 1/8 = 12.5 rounds up
    let eighths: Vec<Reminder> = (1..=8).map(|i| reminder(i, ReminderType::Device, i == 1)).collect();
    assert_eq!(overall_score(&eighths), 13);
}

#[test]
fn test_toggle_flips_only_target() {
    let mut ledger = seeded();
    let before = ledger.reminders().to_vec();

    assert_eq!(ledger.toggle_completion(2), Some(true));

    let after = ledger.reminders();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    let mut expected = before[1].clone();
    expected.completed = true;
    assert_eq!(after[1], expected);
}

#[test]
fn test_toggle_twice_restores() {
    let mut ledger = seeded();
    let before = ledger.reminders().to_vec();
    ledger.toggle_completion(3);
    assert_eq!(ledger.toggle_completion(3), Some(false));
    assert_eq!(ledger.reminders(), before.as_slice());
}

#[test]
fn test_toggle_unknown_id() {
    let mut ledger = seeded();
    let before = ledger.reminders().to_vec();
    assert_eq!(ledger.toggle_completion(99), None);
    assert_eq!(ledger.reminders(), before.as_slice());
}

#[test]
fn test_breakdown_empty_category_is_zero() {
    let breakdown = category_breakdown(&[reminder(1, ReminderType::Password, true)]);
    assert_eq!(breakdown.len(), 4);
    assert_eq!(
        breakdown[&ReminderType::Device],
        CategoryStats { completed: 0, total: 0, percentage: 0.0 }
    );
    assert_eq!(
        breakdown[&ReminderType::Password],
        CategoryStats { completed: 1, total: 1, percentage: 100.0 }
    );
}

#[test]
fn test_breakdown_follows_category_order() {
    let breakdown = category_breakdown(&[]);
    let kinds: Vec<ReminderType> = breakdown.keys().copied().collect();
    assert_eq!(kinds, ReminderType::ALL.to_vec());
}

#[test]
fn test_breakdown_partial_category() {
    let reminders = vec![
        reminder(1, ReminderType::Security, true),
        reminder(2, ReminderType::Security, false),
        reminder(3, ReminderType::Security, false),
        reminder(4, ReminderType::Security, false),
    ];
    let stats = category_breakdown(&reminders)[&ReminderType::Security];
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.percentage, 25.0);
}

#[test]
fn test_end_to_end_toggle_scenario() {
    let mut ledger = seeded();
    assert_eq!(ledger.active_count(), 3);
    assert_eq!(ledger.overall_score(), 0);

    ledger.toggle_completion(2);

    assert_eq!(ledger.active_count(), 2);
    assert_eq!(ledger.completed_count(), 1);
    assert_eq!(ledger.overall_score(), 33);
    assert_eq!(
        ledger.category_breakdown()[&ReminderType::Cleanup],
        CategoryStats { completed: 1, total: 1, percentage: 100.0 }
    );
}

#[test]
fn test_reminder_serializes_type_field() {
    let json = serde_json::to_value(reminder(1, ReminderType::Cleanup, false)).unwrap();
    assert_eq!(json["type"], "cleanup");
    assert_eq!(json["due_date"], "2025-10-20");
}
