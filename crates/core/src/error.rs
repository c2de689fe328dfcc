use thiserror::Error;

/// Rejected form input. Surfaced inline as a toast, never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("username and password are required")]
    MissingCredentials,

    #[error("all registration fields are required")]
    MissingRegistrationField,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("email address is invalid")]
    InvalidEmail,
}
