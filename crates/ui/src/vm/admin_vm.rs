use chrono::{DateTime, Utc};
use portal_core::model::{AdminStats, AdminUserRecord, ProgressRecord};

/// Row of the admin users table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRowVm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub school: String,
    pub role_label: &'static str,
    pub role_class: &'static str,
    pub active_label: &'static str,
    pub active_class: &'static str,
    pub last_login_label: String,
}

/// View-model for the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminVm {
    pub stats: AdminStats,
    pub rows: Vec<AdminRowVm>,
}

impl AdminVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Localized last-login date (d/m/Y) or the explicit "never" marker.
#[must_use]
pub fn format_last_login(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "Belum pernah".to_string(),
        |at| at.format("%-d/%-m/%Y").to_string(),
    )
}

#[must_use]
pub fn map_admin(users: &[AdminUserRecord], progress: &[ProgressRecord]) -> AdminVm {
    let rows = users
        .iter()
        .map(|user| {
            let school = if user.school.is_empty() {
                "-".to_string()
            } else {
                user.school.clone()
            };
            AdminRowVm {
                username: user.username.clone(),
                full_name: user.full_name.clone(),
                email: user.email.clone(),
                school,
                role_label: if user.role.is_admin() {
                    "👑 Admin"
                } else {
                    "👤 User"
                },
                role_class: if user.role.is_admin() {
                    "badge badge--admin"
                } else {
                    "badge badge--user"
                },
                active_label: if user.is_active {
                    "✓ Aktif"
                } else {
                    "✗ Nonaktif"
                },
                active_class: if user.is_active {
                    "badge badge--active"
                } else {
                    "badge badge--inactive"
                },
                last_login_label: format_last_login(user.last_login),
            }
        })
        .collect();

    AdminVm {
        stats: AdminStats::compute(users, progress),
        rows,
    }
}
