//! Transient feedback notifications.
//!
//! A single toast is visible at a time and auto-dismisses after
//! [`TOAST_DURATION`]. Every user-visible outcome — login, registration,
//! progress writes — goes through here.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.severity {
            Severity::Success => "toast toast--success",
            Severity::Error => "toast toast--error",
        }
    }
}

/// Context handle for showing toasts from any view.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<(u64, Toast)>>,
    next_id: Signal<u64>,
}

impl Toaster {
    /// Show `toast`, replacing whatever is on screen, and schedule its
    /// dismissal. A newer toast is never dismissed by an older timer.
    pub fn show(&mut self, toast: Toast) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.current.set(Some((id, toast)));

        let mut current = self.current;
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            if current.peek().as_ref().map(|(shown, _)| *shown) == Some(id) {
                current.set(None);
            }
        });
    }

    /// The toast currently on screen, if any.
    #[must_use]
    pub fn active(&self) -> Option<Toast> {
        self.current.read().as_ref().map(|(_, toast)| toast.clone())
    }
}

/// Create the toaster and provide it through context. Call once, from the
/// root component.
pub fn use_toaster_provider() -> Toaster {
    let current = use_signal(|| None);
    let next_id = use_signal(|| 0_u64);
    use_context_provider(|| Toaster { current, next_id })
}

/// Renders the active toast, if any.
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_context::<Toaster>();
    rsx! {
        if let Some(toast) = toaster.active() {
            div { class: "{toast.css_class()}", "{toast.message}" }
        }
    }
}
