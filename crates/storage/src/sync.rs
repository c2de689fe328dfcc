//! Contract of the externally supplied data-synchronization collaborator.
//!
//! The collaborator owns the progress collection. The client registers one
//! push-based change handler and issues `create`/`update` writes; each call
//! resolves to the collaborator's result flag — `Ok(())` for a success flag,
//! [`SyncError::Rejected`] for a failure flag.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_core::model::ProgressRecord;
use thiserror::Error;

/// Errors surfaced by the data-sync collaborator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyncError {
    /// The collaborator reported a failed result flag.
    #[error("sync rejected the write")]
    Rejected,

    #[error("sync unavailable: {0}")]
    Unavailable(String),
}

/// Receives the full progress collection whenever it changes remotely.
pub trait ProgressHandler: Send + Sync {
    fn on_data_changed(&self, data: Vec<ProgressRecord>);
}

/// The data-sync collaborator contract.
#[async_trait]
pub trait ProgressSync: Send + Sync {
    /// Register the push-based change handler.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's failure flag as `SyncError`.
    async fn init(&self, handler: Arc<dyn ProgressHandler>) -> Result<(), SyncError>;

    /// Persist a new record remotely.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's failure flag as `SyncError`.
    async fn create(&self, record: &ProgressRecord) -> Result<(), SyncError>;

    /// Persist changes to an existing record remotely.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's failure flag as `SyncError`.
    async fn update(&self, record: &ProgressRecord) -> Result<(), SyncError>;
}

#[derive(Default)]
struct SyncState {
    records: Vec<ProgressRecord>,
    handler: Option<Arc<dyn ProgressHandler>>,
    fail_writes: bool,
    creates: usize,
    updates: usize,
}

/// In-memory collaborator for tests and offline runs.
///
/// Stores the collection locally and pushes a full snapshot to the handler
/// after every accepted write, the way the hosted service reconciles.
#[derive(Clone, Default)]
pub struct InMemoryProgressSync {
    inner: Arc<Mutex<SyncState>>,
}

impl InMemoryProgressSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A collaborator pre-seeded with `records`.
    #[must_use]
    pub fn with_records(records: Vec<ProgressRecord>) -> Self {
        let sync = Self::new();
        if let Ok(mut state) = sync.inner.lock() {
            state.records = records;
        }
        sync
    }

    /// Make subsequent writes report a failure flag.
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut state) = self.inner.lock() {
            state.fail_writes = fail;
        }
    }

    /// Snapshot of the stored collection.
    #[must_use]
    pub fn records(&self) -> Vec<ProgressRecord> {
        self.inner.lock().map(|s| s.records.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn create_count(&self) -> usize {
        self.inner.lock().map(|s| s.creates).unwrap_or(0)
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.inner.lock().map(|s| s.updates).unwrap_or(0)
    }

    /// Simulate a remote reconciliation: replace the collection and notify
    /// the registered handler with the full snapshot.
    pub fn push_snapshot(&self, records: Vec<ProgressRecord>) {
        let handler = {
            let Ok(mut state) = self.inner.lock() else {
                return;
            };
            state.records = records;
            state.handler.clone()
        };
        self.notify(handler);
    }

    fn notify(&self, handler: Option<Arc<dyn ProgressHandler>>) {
        if let Some(handler) = handler {
            handler.on_data_changed(self.records());
        }
    }

    fn write(
        &self,
        apply: impl FnOnce(&mut SyncState),
    ) -> Result<Option<Arc<dyn ProgressHandler>>, SyncError> {
        let mut state = self
            .inner
            .lock()
            .map_err(|e| SyncError::Unavailable(e.to_string()))?;
        if state.fail_writes {
            return Err(SyncError::Rejected);
        }
        apply(&mut state);
        Ok(state.handler.clone())
    }
}

#[async_trait]
impl ProgressSync for InMemoryProgressSync {
    async fn init(&self, handler: Arc<dyn ProgressHandler>) -> Result<(), SyncError> {
        let registered = {
            let mut state = self
                .inner
                .lock()
                .map_err(|e| SyncError::Unavailable(e.to_string()))?;
            state.handler = Some(Arc::clone(&handler));
            state.handler.clone()
        };
        // Deliver the current collection right away, like the hosted SDK.
        self.notify(registered);
        Ok(())
    }

    async fn create(&self, record: &ProgressRecord) -> Result<(), SyncError> {
        let handler = self.write(|state| {
            state.records.push(record.clone());
            state.creates += 1;
        })?;
        self.notify(handler);
        Ok(())
    }

    async fn update(&self, record: &ProgressRecord) -> Result<(), SyncError> {
        let handler = self.write(|state| {
            match state
                .records
                .iter_mut()
                .find(|existing| existing.matches(&record.username, record.module_number))
            {
                Some(existing) => *existing = record.clone(),
                None => state.records.push(record.clone()),
            }
            state.updates += 1;
        })?;
        self.notify(handler);
        Ok(())
    }
}
