use dioxus::prelude::*;
use portal_core::model::{AdminUserRecord, ProgressRecord};

use crate::vm::map_admin;

/// Read-only admin dashboard: aggregate stats plus the users table.
#[component]
pub fn AdminPanel(users: Vec<AdminUserRecord>, progress: Vec<ProgressRecord>) -> Element {
    let vm = map_admin(&users, &progress);
    let stats = vm.stats;

    let rows = vm.rows.iter().map(|row| {
        rsx! {
            tr { class: "admin-row",
                td { "{row.username}" }
                td { "{row.full_name}" }
                td { "{row.email}" }
                td { "{row.school}" }
                td { span { class: "{row.role_class}", "{row.role_label}" } }
                td { span { class: "{row.active_class}", "{row.active_label}" } }
                td { "{row.last_login_label}" }
            }
        }
    });

    rsx! {
        section { class: "admin-panel", id: "admin-panel",
            h2 { class: "section-title", "Dashboard Admin" }

            div { class: "admin-stats",
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.total_users}" }
                    span { class: "stat-label", "Total Pengguna" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.active_users}" }
                    span { class: "stat-label", "Pengguna Aktif" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.regular_users}" }
                    span { class: "stat-label", "Total Guru" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.average_progress_percent}%" }
                    span { class: "stat-label", "Rata-rata Progress" }
                }
            }

            table { class: "admin-table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Nama Lengkap" }
                        th { "Email" }
                        th { "Sekolah" }
                        th { "Peran" }
                        th { "Status" }
                        th { "Login Terakhir" }
                    }
                }
                tbody {
                    if vm.is_empty() {
                        tr {
                            td { colspan: "7", class: "admin-empty",
                                div { class: "admin-empty-emblem", "📭" }
                                div { "Belum ada data pengguna" }
                                div { class: "admin-empty-hint",
                                    "Data akan muncul setelah ada pengguna yang mendaftar"
                                }
                            }
                        }
                    } else {
                        {rows}
                    }
                }
            }
        }
    }
}
