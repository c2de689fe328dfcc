//! Login, registration, logout, and session restore.

use std::sync::{Arc, RwLock};

use portal_core::ValidationError;
use portal_core::model::{Registration, RegistrationDraft, Session};
use reqwest::Client;
use serde::Serialize;
use storage::session_store::SessionStore;
use tracing::{debug, info};

use crate::directory::DirectoryService;
use crate::error::{AuthError, FetchError, RegisterError};

/// Outcome of a registration submission.
///
/// The remote endpoint's response is unreadable by design, so a submission
/// can only ever be unconfirmed: the request was sent, the remote outcome is
/// unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationReceipt {
    Unconfirmed,
}

/// Authenticates learners and admins against the remote user directory.
pub struct AuthService {
    directory: DirectoryService,
    store: Arc<dyn SessionStore>,
    client: Client,
    api_url: String,
    current: RwLock<Option<Session>>,
}

impl AuthService {
    #[must_use]
    pub fn new(
        directory: DirectoryService,
        store: Arc<dyn SessionStore>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            store,
            client: Client::new(),
            api_url: api_url.into(),
            current: RwLock::new(None),
        }
    }

    /// Currently authenticated session, if any.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    /// Warm the directory on launch. The result is discarded: the directory
    /// is reloaded on every login anyway.
    pub async fn preload(&self) {
        let records = self.directory.load().await;
        debug!(count = records.len(), "directory preloaded");
    }

    /// Authenticate `username`.
    ///
    /// The directory is reloaded on every attempt. The password must be
    /// non-blank but is otherwise never checked against anything — the sheet
    /// carries no credential to check it against. That gap is intentional
    /// and pinned by tests; do not fix it here.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` for blank input (the directory is not
    /// contacted), `AuthError::UserNotFound` when no record matches, and
    /// `AuthError::Store` if persisting the session fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let records = self.directory.load().await;
        let matched = records
            .iter()
            .find(|record| record.matches_username(username));
        let Some(record) = matched else {
            debug!(username, "login failed: no matching record");
            return Err(AuthError::UserNotFound);
        };

        let session = Session::from_directory_record(record, username);
        self.store.save(&session).await?;
        if let Ok(mut guard) = self.current.write() {
            *guard = Some(session.clone());
        }
        info!(username = %session.username, role = session.role.as_str(), "login succeeded");
        Ok(session)
    }

    /// Validate and submit a registration.
    ///
    /// Fire-and-forget: the POST is sent and its response dropped unread, so
    /// the receipt is always [`RegistrationReceipt::Unconfirmed`].
    ///
    /// # Errors
    ///
    /// `RegisterError::Validation` for rejected input and
    /// `RegisterError::Fetch` when the request cannot be sent at all.
    pub async fn register(
        &self,
        draft: RegistrationDraft,
    ) -> Result<RegistrationReceipt, RegisterError> {
        let registration = draft.validate()?;
        let payload = RegisterPayload::from(&registration);

        self.client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        info!(username = %registration.username, "registration submitted, outcome unconfirmed");
        Ok(RegistrationReceipt::Unconfirmed)
    }

    /// Clear the persisted and in-memory session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the persisted key cannot be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await?;
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
        info!("logged out");
        Ok(())
    }

    /// Restore a previously persisted session, if present.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the persisted key cannot be read.
    pub async fn restore(&self) -> Result<Option<Session>, AuthError> {
        let session = self.store.load().await?;
        if let Ok(mut guard) = self.current.write() {
            *guard = session.clone();
        }
        Ok(session)
    }
}

/// Registration wire body, with the original field names.
#[derive(Debug, Serialize)]
struct RegisterPayload<'a> {
    action: &'static str,
    username: &'a str,
    email: &'a str,
    password: &'a str,
    nama_lengkap: &'a str,
    peran: &'static str,
    nama_sekolah: &'a str,
}

impl<'a> From<&'a Registration> for RegisterPayload<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            action: "register",
            username: &registration.username,
            email: &registration.email,
            password: &registration.password,
            nama_lengkap: &registration.full_name,
            peran: "user",
            nama_sekolah: &registration.school,
        }
    }
}
