//! Persistence for the single current-session key.
//!
//! The previous front end kept the session under one browser-local-storage
//! entry; the desktop client keeps the same shape in one JSON file. Absence
//! of the key means unauthenticated.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_core::model::Session;
use thiserror::Error;

/// Errors surfaced by session stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for the current session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` on storage failures; a missing key is
    /// `Ok(None)`.
    async fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Persist `session`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the session cannot be written.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove the persisted session. Clearing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the removal fails.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    current: Arc<Mutex<Option<Session>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let guard = self
            .current
            .lock()
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut guard = self
            .current
            .lock()
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self
            .current
            .lock()
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// File-backed store holding the session as one JSON document.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(session)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
