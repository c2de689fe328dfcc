use dioxus::prelude::*;
use portal_core::model::{AdminUserRecord, ProgressRecord, Session};

use crate::context::AppContext;
use crate::toast::{Toast, Toaster};
use crate::views::{AdminPanel, HeroSection, ModulesSection, ProgressSection};
use crate::views::{ModuleDetailView, ResourcesView};
use crate::vm::{
    GENERIC_ERROR_MESSAGE, LOGOUT_SUCCESS_MESSAGE, ViewRouter, map_progress, role_badge_label,
};

/// Authenticated shell: navbar, the three-state view switch, and the home
/// sections it toggles.
#[component]
pub fn MainShell(session: Session, on_logout: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme().active();
    let mut toaster = use_context::<Toaster>();

    let mut router = use_signal(ViewRouter::new);
    let mut progress_records = use_signal(Vec::<ProgressRecord>::new);
    let mut admin_users = use_signal(Vec::<AdminUserRecord>::new);

    let is_admin = session.role.is_admin();

    // Register with the sync collaborator and mirror every push — remote or
    // local — into the progress signal.
    let progress_service = ctx.progress();
    use_effect(move || {
        let progress = progress_service.clone();
        spawn(async move {
            // A failed registration leaves the portal running with no
            // progress data, as before.
            let _ = progress.init().await;
            let mut watcher = progress.watch();
            loop {
                let snapshot = watcher.borrow_and_update().clone();
                progress_records.set(snapshot);
                if watcher.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    // Admins also trigger the (unreadable) admin data load.
    let admin_service = ctx.admin();
    use_effect(move || {
        if !is_admin {
            return;
        }
        let admin = admin_service.clone();
        spawn(async move {
            admin_users.set(admin.load_all_users().await);
        });
    });

    let auth = ctx.auth();
    let do_logout = use_callback(move |()| {
        let auth = auth.clone();
        spawn(async move {
            match auth.logout().await {
                Ok(()) => {
                    toaster.show(Toast::success(LOGOUT_SUCCESS_MESSAGE));
                    on_logout.call(());
                }
                Err(_) => toaster.show(Toast::error(GENERIC_ERROR_MESSAGE)),
            }
        });
    });

    let progress_vm = map_progress(&progress_records(), &session.username);
    let badge_class = if is_admin {
        "navbar-badge navbar-badge--admin"
    } else {
        "navbar-badge"
    };

    // Entering a detail view hides the home sections; leaving restores them.
    let content = if router().home_sections_visible() {
        rsx! {
            HeroSection {
                full_name: session.full_name.clone(),
                title: theme.hero_title.clone(),
                subtitle: theme.hero_subtitle.clone(),
                percent: progress_vm.percent,
            }
            ModulesSection {
                vm: progress_vm.clone(),
                heading: theme.modules_heading.clone(),
                on_open_module: move |number| router.with_mut(|r| r.open_module(number)),
                on_open_resources: move |()| router.with_mut(ViewRouter::open_resources),
            }
            ProgressSection { vm: progress_vm.clone() }
            if is_admin {
                AdminPanel {
                    users: admin_users(),
                    progress: progress_records(),
                }
            }
        }
    } else {
        match router().current_module() {
            Some(module) => rsx! {
                ModuleDetailView {
                    session: session.clone(),
                    module,
                    on_back: move |()| router.with_mut(ViewRouter::go_home),
                }
            },
            None => rsx! {
                ResourcesView {
                    on_back: move |()| router.with_mut(ViewRouter::go_home),
                }
            },
        }
    };

    rsx! {
        div { class: "main-app",
            header { class: "navbar",
                div { class: "navbar-brand", "{theme.platform_title}" }
                div { class: "navbar-user",
                    span { class: "navbar-name", "{session.full_name}" }
                    span { class: "{badge_class}", "{role_badge_label(session.role)}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| do_logout.call(()),
                        "Keluar"
                    }
                }
            }

            main { class: "content", {content} }

            footer { class: "footer", "{theme.footer_text}" }
        }
    }
}
