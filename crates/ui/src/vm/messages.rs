//! Localized user-facing strings.

use portal_core::ValidationError;
use portal_core::model::{ModuleNumber, Role};

pub const USER_NOT_FOUND_MESSAGE: &str = "Username tidak ditemukan";
pub const GENERIC_ERROR_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logout berhasil";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registrasi berhasil! Silakan login dengan akun Anda";
pub const ALREADY_COMPLETED_MESSAGE: &str = "✓ Modul ini sudah diselesaikan sebelumnya!";
pub const PROGRESS_SAVE_FAILED_MESSAGE: &str = "❌ Gagal menyimpan progress. Coba lagi.";

#[must_use]
pub fn login_success_message(full_name: &str) -> String {
    format!("Login berhasil! Selamat datang {full_name}")
}

#[must_use]
pub fn module_completed_message(module: ModuleNumber) -> String {
    format!("🎉 Selamat! Modul {module} berhasil diselesaikan!")
}

#[must_use]
pub fn role_badge_label(role: Role) -> &'static str {
    if role.is_admin() { "👑 Admin" } else { "👤 User" }
}

/// Toast text for a rejected form input.
#[must_use]
pub fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::MissingCredentials => "Username dan password harus diisi",
        ValidationError::MissingRegistrationField => "Semua field harus diisi",
        ValidationError::PasswordTooShort => "Password minimal 6 karakter",
        ValidationError::InvalidEmail => "Email tidak valid",
        _ => GENERIC_ERROR_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_message_carries_the_name() {
        assert_eq!(
            login_success_message("Budi Santoso"),
            "Login berhasil! Selamat datang Budi Santoso"
        );
    }

    #[test]
    fn module_message_carries_the_number() {
        let module = ModuleNumber::new(4).unwrap();
        assert_eq!(
            module_completed_message(module),
            "🎉 Selamat! Modul 4 berhasil diselesaikan!"
        );
    }

    #[test]
    fn validation_errors_localize() {
        assert_eq!(
            validation_message(&ValidationError::PasswordTooShort),
            "Password minimal 6 karakter"
        );
    }
}
