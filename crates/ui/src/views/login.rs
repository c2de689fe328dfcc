use std::time::Duration;

use dioxus::prelude::*;
use portal_core::ValidationError;
use portal_core::model::{RegistrationDraft, Session};
use services::error::{AuthError, RegisterError};

use crate::context::AppContext;
use crate::toast::{Toast, Toaster};
use crate::vm::{
    GENERIC_ERROR_MESSAGE, REGISTER_SUCCESS_MESSAGE, USER_NOT_FOUND_MESSAGE,
    login_success_message, validation_message,
};

/// Delay before the login outcome is reported, kept from the original flow.
const LOGIN_RESOLVE_DELAY: Duration = Duration::from_millis(1500);
/// Pause between the welcome toast and the switch to the main app.
const LOGIN_TRANSITION_DELAY: Duration = Duration::from_millis(1000);
/// Registration success is simulated after this delay; the remote outcome is
/// never readable.
const REGISTER_RESOLVE_DELAY: Duration = Duration::from_millis(1500);
/// Pause before returning to the login form with the username pre-filled.
const REGISTER_SWITCH_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn LoginPage(on_login: EventHandler<Session>) -> Element {
    let ctx = use_context::<AppContext>();
    let theme = ctx.theme().active();
    let mut toaster = use_context::<Toaster>();

    let mut show_register = use_signal(|| false);

    // Login form state.
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut login_busy = use_signal(|| false);

    // Register form state.
    let mut reg_username = use_signal(String::new);
    let mut reg_email = use_signal(String::new);
    let mut reg_password = use_signal(String::new);
    let mut reg_fullname = use_signal(String::new);
    let mut reg_school = use_signal(String::new);
    let mut reg_show_password = use_signal(|| false);
    let mut register_busy = use_signal(|| false);

    let auth_for_login = ctx.auth();
    let do_login = use_callback(move |()| {
        if login_busy() {
            return;
        }
        // Blank input is rejected before the spinner ever shows.
        if username.peek().trim().is_empty() || password.peek().trim().is_empty() {
            toaster.show(Toast::error(validation_message(
                &ValidationError::MissingCredentials,
            )));
            return;
        }

        let auth = auth_for_login.clone();
        spawn(async move {
            login_busy.set(true);
            let submitted = username.peek().to_string();
            let secret = password.peek().to_string();
            let result = auth.login(&submitted, &secret).await;
            tokio::time::sleep(LOGIN_RESOLVE_DELAY).await;
            login_busy.set(false);

            match result {
                Ok(session) => {
                    toaster.show(Toast::success(login_success_message(&session.full_name)));
                    tokio::time::sleep(LOGIN_TRANSITION_DELAY).await;
                    on_login.call(session);
                }
                Err(AuthError::UserNotFound) => {
                    toaster.show(Toast::error(USER_NOT_FOUND_MESSAGE));
                }
                Err(AuthError::Validation(err)) => {
                    toaster.show(Toast::error(validation_message(&err)));
                }
                Err(_) => toaster.show(Toast::error(GENERIC_ERROR_MESSAGE)),
            }
        });
    });

    let auth_for_register = ctx.auth();
    let do_register = use_callback(move |()| {
        if register_busy() {
            return;
        }
        let draft = RegistrationDraft {
            username: reg_username.peek().to_string(),
            email: reg_email.peek().to_string(),
            password: reg_password.peek().to_string(),
            full_name: reg_fullname.peek().to_string(),
            school: reg_school.peek().to_string(),
        };
        // Validation feedback is immediate; only the submission shows the
        // spinner.
        if let Err(err) = draft.clone().validate() {
            toaster.show(Toast::error(validation_message(&err)));
            return;
        }

        let auth = auth_for_register.clone();
        spawn(async move {
            register_busy.set(true);
            match auth.register(draft).await {
                Ok(_unconfirmed) => {
                    // The remote response is unreadable; success is simulated
                    // after a fixed delay, exactly as before.
                    tokio::time::sleep(REGISTER_RESOLVE_DELAY).await;
                    register_busy.set(false);
                    toaster.show(Toast::success(REGISTER_SUCCESS_MESSAGE));
                    tokio::time::sleep(REGISTER_SWITCH_DELAY).await;
                    username.set(reg_username.peek().trim().to_string());
                    reg_username.set(String::new());
                    reg_email.set(String::new());
                    reg_password.set(String::new());
                    reg_fullname.set(String::new());
                    reg_school.set(String::new());
                    show_register.set(false);
                }
                Err(RegisterError::Validation(err)) => {
                    register_busy.set(false);
                    toaster.show(Toast::error(validation_message(&err)));
                }
                Err(_) => {
                    register_busy.set(false);
                    toaster.show(Toast::error(GENERIC_ERROR_MESSAGE));
                }
            }
        });
    });

    let heading = if show_register() {
        "Daftar Akun Baru".to_string()
    } else {
        theme.platform_title.clone()
    };
    let subtitle = if show_register() {
        "Buat akun untuk mulai belajar"
    } else {
        "Masuk ke akun Anda"
    };
    let password_type = if show_password() { "text" } else { "password" };
    let reg_password_type = if reg_show_password() { "text" } else { "password" };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "{heading}" }
                    p { class: "login-subtitle", "{subtitle}" }
                }

                if show_register() {
                    div { class: "form",
                        div { class: "form-group",
                            label { r#for: "reg-username", "Username" }
                            input {
                                id: "reg-username",
                                r#type: "text",
                                placeholder: "Pilih username",
                                value: "{reg_username}",
                                oninput: move |evt| reg_username.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "reg-fullname", "Nama Lengkap" }
                            input {
                                id: "reg-fullname",
                                r#type: "text",
                                placeholder: "Nama lengkap Anda",
                                value: "{reg_fullname}",
                                oninput: move |evt| reg_fullname.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "reg-email", "Email" }
                            input {
                                id: "reg-email",
                                r#type: "email",
                                placeholder: "nama@sekolah.id",
                                value: "{reg_email}",
                                oninput: move |evt| reg_email.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "reg-school", "Nama Sekolah" }
                            input {
                                id: "reg-school",
                                r#type: "text",
                                placeholder: "Asal sekolah",
                                value: "{reg_school}",
                                oninput: move |evt| reg_school.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "reg-password", "Password" }
                            div { class: "password-field",
                                input {
                                    id: "reg-password",
                                    r#type: "{reg_password_type}",
                                    placeholder: "Minimal 6 karakter",
                                    value: "{reg_password}",
                                    oninput: move |evt| reg_password.set(evt.value()),
                                }
                                button {
                                    class: "password-toggle",
                                    r#type: "button",
                                    onclick: move |_| reg_show_password.set(!reg_show_password()),
                                    if reg_show_password() { "🙈" } else { "👁" }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "button",
                            disabled: register_busy(),
                            onclick: move |_| do_register.call(()),
                            if register_busy() {
                                span { class: "spinner" }
                                "Memproses..."
                            } else {
                                "Daftar"
                            }
                        }
                        p { class: "form-footer",
                            "Sudah punya akun? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| show_register.set(false),
                                "Masuk di sini"
                            }
                        }
                    }
                } else {
                    div { class: "form",
                        div { class: "form-group",
                            label { r#for: "username", "Username" }
                            input {
                                id: "username",
                                r#type: "text",
                                placeholder: "Masukkan username",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "password", "Password" }
                            div { class: "password-field",
                                input {
                                    id: "password",
                                    r#type: "{password_type}",
                                    placeholder: "Masukkan password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    onkeydown: move |evt| {
                                        if evt.key().to_string() == "Enter" {
                                            do_login.call(());
                                        }
                                    },
                                }
                                button {
                                    class: "password-toggle",
                                    r#type: "button",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() { "🙈" } else { "👁" }
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "button",
                            disabled: login_busy(),
                            onclick: move |_| do_login.call(()),
                            if login_busy() {
                                span { class: "spinner" }
                                "Memproses..."
                            } else {
                                "Masuk"
                            }
                        }
                        p { class: "form-footer",
                            "Belum punya akun? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| show_register.set(true),
                                "Daftar di sini"
                            }
                        }
                    }
                }
            }
        }
    }
}
