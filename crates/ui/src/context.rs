use std::sync::Arc;

use services::{AdminService, AuthService, ProgressService, ThemeService};

/// Surface the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn admin(&self) -> Arc<AdminService>;
    fn theme(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    admin: Arc<AdminService>,
    theme: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            progress: app.progress(),
            admin: app.admin(),
            theme: app.theme(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
