mod admin;
mod home;
mod login;
mod module_detail;
mod resources;
mod shell;

pub use admin::AdminPanel;
pub use home::{HeroSection, ModulesSection, ProgressSection};
pub use login::LoginPage;
pub use module_detail::ModuleDetailView;
pub use resources::ResourcesView;
pub use shell::MainShell;
