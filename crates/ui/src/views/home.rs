use dioxus::prelude::*;
use portal_core::model::ModuleNumber;

use crate::vm::{ModuleStatusVm, ProgressVm};

/// Hero banner with the welcome line and overall completion.
#[component]
pub fn HeroSection(full_name: String, title: String, subtitle: String, percent: u8) -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "{title}" }
            p { class: "hero-subtitle", "{subtitle}" }
            p { class: "hero-welcome", "Selamat datang, " span { class: "hero-username", "{full_name}" } }
            div { class: "hero-progress",
                span { class: "hero-progress-value", "{percent}%" }
                span { class: "hero-progress-label", "progres belajar Anda" }
            }
        }
    }
}

/// Grid of the five module cards plus the entry to the resources page.
#[component]
pub fn ModulesSection(
    vm: ProgressVm,
    heading: String,
    on_open_module: EventHandler<ModuleNumber>,
    on_open_resources: EventHandler<()>,
) -> Element {
    let cards = vm.modules.iter().map(|module| {
        let number = module.number;
        let name = module.name;
        let completed = module.completed;
        rsx! {
            button {
                class: "module-card",
                r#type: "button",
                onclick: move |_| on_open_module.call(number),
                span { class: "module-card-number", "Modul {number}" }
                span { class: "module-card-name", "{name}" }
                if completed {
                    span { class: "completed-badge", "✓ Selesai" }
                }
            }
        }
    });

    rsx! {
        section { class: "modules", id: "modules",
            div { class: "section-header",
                h2 { class: "section-title", "{heading}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_open_resources.call(()),
                    "📚 Sumber Belajar"
                }
            }
            div { class: "module-grid", {cards} }
        }
    }
}

/// Per-module status list with the overall bar.
#[component]
pub fn ProgressSection(vm: ProgressVm) -> Element {
    let rows = vm.modules.iter().map(|module| {
        let status_class = if module.completed {
            "progress-status progress-status--done"
        } else {
            "progress-status"
        };
        rsx! {
            ProgressRow {
                module: module.clone(),
                status_class,
            }
        }
    });

    rsx! {
        section { class: "progress", id: "progress",
            h2 { class: "section-title", "Progress Belajar" }
            div { class: "progress-summary",
                span { class: "progress-percent", "{vm.percent}%" }
                span { class: "progress-count",
                    "{vm.completed_count} dari {vm.total_modules} modul selesai"
                }
            }
            div { class: "progress-bar-track",
                div { class: "progress-bar-fill", style: "width: {vm.percent}%" }
            }
            div { class: "progress-list", {rows} }
        }
    }
}

#[component]
fn ProgressRow(module: ModuleStatusVm, status_class: &'static str) -> Element {
    rsx! {
        div { class: "{module.row_class()}",
            span { class: "progress-item-name", "Modul {module.number}: {module.name}" }
            span { class: "{status_class}", "{module.status_label()}" }
        }
    }
}
