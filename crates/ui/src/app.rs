use dioxus::prelude::*;
use portal_core::model::Session;

use crate::context::AppContext;
use crate::toast::{ToastHost, use_toaster_provider};
use crate::views::{LoginPage, MainShell};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme().active();
    let mut session = use_signal(|| None::<Session>);
    let mut restoring = use_signal(|| true);
    use_toaster_provider();

    // Restore a persisted session and warm the directory once on launch.
    use_effect(move || {
        let auth = ctx.auth();
        spawn(async move {
            if let Ok(Some(existing)) = auth.restore().await {
                session.set(Some(existing));
            }
            restoring.set(false);
            auth.preload().await;
        });
    });

    let body = if restoring() {
        rsx! {
            div { class: "restore-splash" }
        }
    } else {
        match session() {
            Some(current) => rsx! {
                MainShell {
                    session: current,
                    on_logout: move |()| session.set(None),
                }
            },
            None => rsx! {
                LoginPage {
                    on_login: move |authenticated| session.set(Some(authenticated)),
                }
            },
        }
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{theme.platform_title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Terjadi kesalahan" }
                        pre { "{errors:?}" }
                    }
                },
                {body}
            }
            ToastHost {}
        }
    }
}
