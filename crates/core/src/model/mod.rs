mod admin;
mod module;
mod progress;
mod registration;
mod session;
mod theme;
mod user;

pub use admin::{AdminStats, AdminUserRecord};
pub use module::{InvalidModuleNumber, MODULE_COUNT, ModuleNumber, module_name};
pub use progress::{ProgressRecord, completed_count, completion_percent};
pub use registration::{Registration, RegistrationDraft};
pub use session::{Role, Session};
pub use theme::{ThemeCapabilities, ThemeConfig, ThemeOverrides, edit_panel_values};
pub use user::{USERNAME_MATCH_ALIASES, UserRecord};
