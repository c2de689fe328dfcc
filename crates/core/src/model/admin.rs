use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::progress::{ProgressRecord, completion_percent};
use crate::model::session::Role;

/// Richer user record intended for the admin dashboard.
///
/// In the current integration this collection is always empty: the admin
/// endpoint's response cannot be read under the request mode used. The shape
/// is kept so the dashboard renders real data the day that changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserRecord {
    pub username: String,
    #[serde(rename = "nama_lengkap")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "nama_sekolah")]
    pub school: String,
    #[serde(rename = "peran")]
    pub role: Role,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

/// Aggregate statistics shown at the top of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub active_users: usize,
    pub regular_users: usize,
    pub average_progress_percent: u32,
}

impl AdminStats {
    /// Derives the dashboard statistics.
    ///
    /// The average is the mean completion percentage over the distinct
    /// usernames present in the progress collection (users with only
    /// incomplete records contribute 0%); it is 0 when there is no progress
    /// data at all.
    #[must_use]
    pub fn compute(users: &[AdminUserRecord], progress: &[ProgressRecord]) -> Self {
        let usernames: BTreeSet<&str> = progress
            .iter()
            .map(|record| record.username.as_str())
            .collect();

        let average_progress_percent = if usernames.is_empty() {
            0
        } else {
            let total: u32 = usernames
                .iter()
                .map(|username| u32::from(completion_percent(progress, username)))
                .sum();
            // Percentages are bounded by 100, so the casts cannot lose data.
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            #[allow(clippy::cast_sign_loss)]
            let average = (f64::from(total) / usernames.len() as f64).round() as u32;
            average
        };

        Self {
            total_users: users.len(),
            active_users: users.iter().filter(|user| user.is_active).count(),
            regular_users: users.iter().filter(|user| user.role == Role::User).count(),
            average_progress_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::module::ModuleNumber;
    use crate::time::fixed_now;

    fn completed(username: &str, value: u8) -> ProgressRecord {
        ProgressRecord::completed_now(username, ModuleNumber::new(value).unwrap(), fixed_now())
    }

    fn user(username: &str, role: Role, is_active: bool) -> AdminUserRecord {
        AdminUserRecord {
            username: username.into(),
            full_name: username.into(),
            email: format!("{username}@sekolah.id"),
            school: "SMPN 1".into(),
            role,
            is_active,
            last_login: None,
        }
    }

    #[test]
    fn averages_over_users_present_in_progress() {
        // U1 completed 2/5, U2 completed 5/5 -> round((40 + 100) / 2) = 70.
        let mut progress: Vec<ProgressRecord> = vec![completed("u1", 1), completed("u1", 2)];
        progress.extend((1..=5).map(|n| completed("u2", n)));

        let stats = AdminStats::compute(&[], &progress);
        assert_eq!(stats.average_progress_percent, 70);
    }

    #[test]
    fn empty_progress_averages_to_zero() {
        let users = vec![user("budi", Role::User, true)];
        let stats = AdminStats::compute(&users, &[]);
        assert_eq!(stats.average_progress_percent, 0);
        assert_eq!(stats.total_users, 1);
    }

    #[test]
    fn counts_active_and_regular_users() {
        let users = vec![
            user("budi", Role::User, true),
            user("siti", Role::User, false),
            user("kepala", Role::Admin, true),
        ];
        let stats = AdminStats::compute(&users, &[]);
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.regular_users, 2);
    }

    #[test]
    fn incomplete_only_users_drag_the_average_down() {
        let mut record = completed("u1", 1);
        record.completed = false;
        record.completed_at = None;
        let progress = vec![record, completed("u2", 1)];

        // u1 contributes 0%, u2 contributes 20% -> mean 10%.
        let stats = AdminStats::compute(&[], &progress);
        assert_eq!(stats.average_progress_percent, 10);
    }
}
