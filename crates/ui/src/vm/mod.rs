mod admin_vm;
mod messages;
mod progress_vm;
mod router;

pub use admin_vm::{AdminRowVm, AdminVm, format_last_login, map_admin};
pub use messages::{
    ALREADY_COMPLETED_MESSAGE, GENERIC_ERROR_MESSAGE, LOGOUT_SUCCESS_MESSAGE,
    PROGRESS_SAVE_FAILED_MESSAGE, REGISTER_SUCCESS_MESSAGE, USER_NOT_FOUND_MESSAGE,
    login_success_message, module_completed_message, role_badge_label, validation_message,
};
pub use progress_vm::{ModuleStatusVm, ProgressVm, map_progress};
pub use router::{View, ViewRouter};
