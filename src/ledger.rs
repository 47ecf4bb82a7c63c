use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};

use crate::models::{CategoryStats, Reminder, ReminderType};

/// Number of reminders marked done.
pub fn completed_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| r.completed).count()
}

/// Number of reminders still open.
pub fn active_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| !r.completed).count()
}

/// Security score: share of completed reminders as a rounded percentage.
///
/// Returns 0 for an empty collection.
pub fn overall_score(reminders: &[Reminder]) -> u8 {
    let total = reminders.len();
    if total == 0 {
        return 0;
    }
    let completed = completed_count(reminders);
    // round(100 * c / t) in integers, halves rounding up
    ((200 * completed + total) / (2 * total)) as u8
}

/// Completion counts for every category, in declaration order.
///
/// Categories with no reminders report a percentage of `0.0`.
pub fn category_breakdown(reminders: &[Reminder]) -> BTreeMap<ReminderType, CategoryStats> {
    ReminderType::ALL
        .iter()
        .map(|&kind| {
            let of_kind = reminders.iter().filter(|r| r.kind == kind);
            let total = of_kind.clone().count();
            let completed = of_kind.filter(|r| r.completed).count();
            let percentage = if total > 0 {
                completed as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            (kind, CategoryStats { completed, total, percentage })
        })
        .collect()
}

/// Ordered collection of reminders owned by a session.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    reminders: Vec<Reminder>,
}

impl Ledger {
    /// Wraps a collection; ids must be unique.
    pub fn new(reminders: Vec<Reminder>) -> Ledger {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                reminders.iter().all(|r| seen.insert(r.id))
            },
            "reminder ids must be unique"
        );
        Ledger { reminders }
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn get(&self, id: u64) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Flips `completed` on the reminder with `id`.
    ///
    /// Returns the new completion state, or `None` if no reminder matches.
    pub fn toggle_completion(&mut self, id: u64) -> Option<bool> {
        match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.completed = !r.completed;
                debug!("Reminder {} completed = {}", id, r.completed);
                Some(r.completed)
            }
            None => {
                warn!("Reminder {} not found", id);
                None
            }
        }
    }

    pub fn overall_score(&self) -> u8 {
        overall_score(&self.reminders)
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.reminders)
    }

    pub fn completed_count(&self) -> usize {
        completed_count(&self.reminders)
    }

    pub fn category_breakdown(&self) -> BTreeMap<ReminderType, CategoryStats> {
        category_breakdown(&self.reminders)
    }
}
