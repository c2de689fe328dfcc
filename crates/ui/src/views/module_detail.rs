use dioxus::prelude::*;
use portal_core::model::{ModuleNumber, Session, module_name};
use services::progress::CompletionOutcome;

use crate::context::AppContext;
use crate::toast::{Toast, Toaster};
use crate::vm::{
    ALREADY_COMPLETED_MESSAGE, PROGRESS_SAVE_FAILED_MESSAGE, module_completed_message,
};

/// Detail page for one learning module.
#[component]
pub fn ModuleDetailView(
    session: Session,
    module: ModuleNumber,
    on_back: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut toaster = use_context::<Toaster>();
    let progress_service = ctx.progress();
    let title = module_name(module);

    // The original returns home immediately and lets the write finish in the
    // background; the toast arrives whenever the sync settles.
    let mark_complete = use_callback(move |()| {
        let progress = progress_service.clone();
        let session = session.clone();
        spawn(async move {
            match progress.mark_complete(Some(&session), module).await {
                Ok(CompletionOutcome::Completed) => {
                    toaster.show(Toast::success(module_completed_message(module)));
                }
                Ok(CompletionOutcome::AlreadyCompleted) => {
                    toaster.show(Toast::success(ALREADY_COMPLETED_MESSAGE));
                }
                Ok(_) => {}
                Err(_) => toaster.show(Toast::error(PROGRESS_SAVE_FAILED_MESSAGE)),
            }
        });
        on_back.call(());
    });

    rsx! {
        section { class: "detail-pane",
            button {
                class: "back-link",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                span { "←" }
                span { "Kembali ke Daftar Modul" }
            }

            div { class: "detail-card",
                h2 { class: "detail-title", "Modul {module}: {title}" }
                p { class: "detail-body",
                    "Konten modul pembelajaran akan ditampilkan di sini..."
                }

                div { class: "detail-cta",
                    h4 { class: "detail-cta-title", "🎓 Selamat Belajar!" }
                    p { class: "detail-cta-body",
                        "Anda telah menyelesaikan pembacaan Modul {module}"
                    }
                    button {
                        class: "btn btn-light",
                        r#type: "button",
                        onclick: move |_| mark_complete.call(()),
                        "Tandai Selesai & Kembali"
                    }
                }
            }
        }
    }
}
