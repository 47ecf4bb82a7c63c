use chrono::{Local, NaiveDate};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::content::{category_label, score_verdict, LEARNING_TOPICS, PASSWORD_STORAGE_HINT, QUICK_TIPS, RECOMMENDATION_OF_THE_DAY};
use crate::error::GeneratorError;
use crate::models::{CategoryStats, PasswordPolicy, Reminder, ReminderType};
use crate::password::generate;
use crate::session::Session;

/// Snapshot of the dashboard metrics, as printed by `dashboard --json`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub score: u8,
    pub verdict: &'static str,
    pub completed: usize,
    pub total: usize,
    pub active: usize,
    pub categories: BTreeMap<ReminderType, CategoryStats>,
}

impl DashboardReport {
    pub fn from_session(session: &Session) -> DashboardReport {
        let ledger = session.ledger();
        let score = ledger.overall_score();
        DashboardReport {
            score,
            verdict: score_verdict(score),
            completed: ledger.completed_count(),
            total: ledger.len(),
            active: ledger.active_count(),
            categories: ledger.category_breakdown(),
        }
    }
}

/// Applies `--complete` toggles to a session.
///
/// Unknown ids are reported on stderr and otherwise ignored.
pub fn apply_toggles(session: &mut Session, ids: &[u64]) {
    for &id in ids {
        if session.toggle_reminder(id).is_none() {
            eprintln!("Reminder {} not found.", id);
        }
    }
}

/// Generates `count` passwords and prints one per line.
pub fn cmd_generate(policy: &PasswordPolicy, count: usize) -> Result<(), GeneratorError> {
    let passwords = (0..count)
        .map(|_| generate(policy))
        .collect::<Result<Vec<_>, _>>()?;
    for p in passwords {
        println!("{}", p);
    }
    Ok(())
}

/// Lists reminders as a table, or as JSON.
pub fn cmd_reminders(session: &Session, json: bool) -> anyhow::Result<()> {
    let reminders = session.ledger().reminders();
    if json {
        println!("{}", serde_json::to_string_pretty(reminders)?);
        return Ok(());
    }
    if reminders.is_empty() {
        println!("No reminders found.");
        return Ok(());
    }
    println!("{}", reminders_table(reminders, Local::now().date_naive()));
    Ok(())
}

/// Prints the security dashboard.
pub fn cmd_dashboard(session: &Session, json: bool) -> anyhow::Result<()> {
    let report = DashboardReport::from_session(session);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let score_color = score_color(report.score);
    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Security score").add_attribute(Attribute::Bold),
            Cell::new("Completed").add_attribute(Attribute::Bold),
            Cell::new("Active").add_attribute(Attribute::Bold),
        ])
        .add_row(vec![
            Cell::new(format!("{}%  {}", report.score, report.verdict)).fg(score_color),
            Cell::new(format!("{}/{}", report.completed, report.total)),
            Cell::new(report.active).fg(Color::Yellow),
        ]);
    println!("{summary}");
    println!("{}", breakdown_table(&report.categories));
    println!("Recommendation of the day: {}", RECOMMENDATION_OF_THE_DAY);
    Ok(())
}

/// Prints the quick tips and learning topics.
pub fn cmd_learn() {
    println!("Quick tips");
    for tip in QUICK_TIPS {
        println!("  * {}: {}", tip.title, tip.body);
    }
    for topic in LEARNING_TOPICS {
        println!();
        println!("{} [{}]", topic.title, category_label(topic.category));
        for point in topic.points {
            println!("  - {}", point);
        }
    }
    println!();
    println!("{}", PASSWORD_STORAGE_HINT);
}

/// Renders reminders with their due-date distance from `today`.
pub fn reminders_table(reminders: &[Reminder], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Due").add_attribute(Attribute::Bold),
            Cell::new("Time Left").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for r in reminders {
        let days_left = (r.due_date - today).num_days();
        let status = if r.completed { "Done" } else { "Pending" };
        let status_color = if r.completed { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.title),
            Cell::new(&r.description),
            Cell::new(category_label(r.kind)),
            Cell::new(r.due_date),
            Cell::new(time_left(days_left)).fg(if days_left < 0 && !r.completed { Color::Red } else { Color::Reset }),
            Cell::new(status).fg(status_color),
        ]);
    }
    table
}

/// Renders the per-category completion table.
pub fn breakdown_table(categories: &BTreeMap<ReminderType, CategoryStats>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Category", "Completed", "Progress"]);
    for (kind, stats) in categories {
        table.add_row(vec![
            Cell::new(category_label(*kind)),
            Cell::new(format!("{} of {}", stats.completed, stats.total)),
            Cell::new(format!("{:.0}%", stats.percentage)),
        ]);
    }
    table
}

/// Formats a day distance as "Today", "3d" or "2d overdue".
pub fn time_left(days_left: i64) -> String {
    if days_left < 0 {
        format!("{}d overdue", days_left.abs())
    } else if days_left == 0 {
        "Today".to_string()
    } else {
        format!("{}d", days_left)
    }
}

fn score_color(score: u8) -> Color {
    if score >= 80 {
        Color::Green
    } else if score >= 50 {
        Color::Yellow
    } else {
        Color::Red
    }
}
