use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::module::{MODULE_COUNT, ModuleNumber, module_name};

/// Completion state for one (user, module) pair.
///
/// Owned and persisted by the external data-sync collaborator; the client
/// only mirrors the full collection as a flat unordered list. Uniqueness per
/// (username, module) is assumed, never enforced locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub module_number: ModuleNumber,
    pub module_name: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub username: String,
}

impl ProgressRecord {
    /// A fresh record marking `module` completed by `username` at `now`.
    #[must_use]
    pub fn completed_now(username: &str, module: ModuleNumber, now: DateTime<Utc>) -> Self {
        Self {
            module_number: module,
            module_name: module_name(module).to_string(),
            completed: true,
            completed_at: Some(now),
            username: username.to_string(),
        }
    }

    /// Whether this record belongs to `(username, module)`. Usernames are
    /// compared exactly, as the previous front end did.
    #[must_use]
    pub fn matches(&self, username: &str, module: ModuleNumber) -> bool {
        self.username == username && self.module_number == module
    }
}

/// Distinct completed module count for `username` in a flat progress list.
#[must_use]
pub fn completed_count(progress: &[ProgressRecord], username: &str) -> usize {
    progress
        .iter()
        .filter(|record| record.completed && record.username == username)
        .map(|record| record.module_number)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Whole-number completion percentage for `username`
/// (distinct completed modules / 5 × 100).
#[must_use]
pub fn completion_percent(progress: &[ProgressRecord], username: &str) -> u8 {
    let count = completed_count(progress, username);
    // count is at most MODULE_COUNT, so this stays within u8.
    (count * 100 / usize::from(MODULE_COUNT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn module(value: u8) -> ModuleNumber {
        ModuleNumber::new(value).unwrap()
    }

    fn completed(username: &str, value: u8) -> ProgressRecord {
        ProgressRecord::completed_now(username, module(value), fixed_now())
    }

    #[test]
    fn new_records_carry_the_catalog_title() {
        let record = completed("budi", 2);
        assert!(record.completed);
        assert_eq!(record.module_name, "Literasi Algoritma");
        assert_eq!(record.completed_at, Some(fixed_now()));
    }

    #[test]
    fn percentage_counts_distinct_completed_modules() {
        let progress = vec![
            completed("budi", 1),
            completed("budi", 3),
            completed("siti", 2),
        ];
        assert_eq!(completed_count(&progress, "budi"), 2);
        assert_eq!(completion_percent(&progress, "budi"), 40);
        assert_eq!(completion_percent(&progress, "siti"), 20);
        assert_eq!(completion_percent(&progress, "andi"), 0);
    }

    #[test]
    fn incomplete_records_do_not_count() {
        let mut record = completed("budi", 1);
        record.completed = false;
        record.completed_at = None;
        assert_eq!(completion_percent(&[record], "budi"), 0);
    }

    #[test]
    fn duplicate_records_count_once() {
        // Uniqueness is assumed, not enforced; a duplicate pair must not
        // inflate the percentage.
        let progress = vec![completed("budi", 4), completed("budi", 4)];
        assert_eq!(completed_count(&progress, "budi"), 1);
        assert_eq!(completion_percent(&progress, "budi"), 20);
    }

    #[test]
    fn full_completion_is_one_hundred_percent() {
        let progress: Vec<ProgressRecord> = (1..=5).map(|n| completed("budi", n)).collect();
        assert_eq!(completion_percent(&progress, "budi"), 100);
    }

    #[test]
    fn usernames_compare_exactly() {
        let progress = vec![completed("Budi", 1)];
        assert_eq!(completion_percent(&progress, "budi"), 0);
    }
}
