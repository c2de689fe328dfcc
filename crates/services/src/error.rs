//! Shared error types for the services crate.

use thiserror::Error;

use portal_core::ValidationError;
use storage::session_store::SessionStoreError;

/// Errors emitted by the directory loader and other remote fetches.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors emitted by `AuthService::login`.
///
/// A failed directory load is deliberately *not* distinguished here: the
/// loader degrades to an empty directory, which surfaces as `UserNotFound`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("username not found")]
    UserNotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Errors emitted by `AuthService::register`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors emitted while reading portal configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {name} URL: {raw}")]
    InvalidUrl { name: &'static str, raw: String },
}
