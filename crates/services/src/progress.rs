//! Per-user module completion, synchronized through the external data-sync
//! collaborator.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use portal_core::Clock;
use portal_core::model::{ModuleNumber, ProgressRecord, Session};
use storage::sync::{ProgressHandler, ProgressSync, SyncError};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Outcome of a completion attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The module was recorded as completed.
    Completed,
    /// The module had already been completed; nothing was written.
    AlreadyCompleted,
    /// Another sync is in flight; the attempt was dropped.
    Busy,
    /// No session is active.
    NoSession,
}

/// Shared mirror of the remote collection. Also the handler registered with
/// the collaborator, so remote pushes land here directly.
struct ProgressState {
    records: watch::Sender<Vec<ProgressRecord>>,
    in_flight: AtomicBool,
}

impl ProgressHandler for ProgressState {
    fn on_data_changed(&self, data: Vec<ProgressRecord>) {
        debug!(count = data.len(), "progress collection replaced by sync push");
        self.records.send_replace(data);
    }
}

/// Tracks completion state mirrored from the external sync collaborator.
///
/// One coarse in-flight flag guards *all* writes system-wide — not just
/// writes for the same module. Reads and change-driven re-renders are
/// unguarded. That is the accepted trade-off for a single-user client.
pub struct ProgressService {
    clock: Clock,
    sync: Arc<dyn ProgressSync>,
    state: Arc<ProgressState>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, sync: Arc<dyn ProgressSync>) -> Self {
        let (records, _) = watch::channel(Vec::new());
        Self {
            clock,
            sync,
            state: Arc::new(ProgressState {
                records,
                in_flight: AtomicBool::new(false),
            }),
        }
    }

    /// Register the change handler with the collaborator.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's failure flag as `SyncError`.
    pub async fn init(&self) -> Result<(), SyncError> {
        let handler: Arc<dyn ProgressHandler> = self.state.clone();
        self.sync.init(handler).await
    }

    /// Snapshot of the mirrored collection.
    #[must_use]
    pub fn records(&self) -> Vec<ProgressRecord> {
        self.state.records.borrow().clone()
    }

    /// Watch mirror replacements — remote pushes and local writes alike.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Vec<ProgressRecord>> {
        self.state.records.subscribe()
    }

    /// Mark `module` completed for the active session.
    ///
    /// No-op when a sync is already in flight or no session is active.
    /// Re-completing an already-completed module reports
    /// [`CompletionOutcome::AlreadyCompleted`] without a write. Otherwise the
    /// existing record is mutated (never re-created) or a new one is created,
    /// and the write is pushed through the collaborator.
    ///
    /// # Errors
    ///
    /// Returns `SyncError` when the collaborator reports failure; the local
    /// mirror is left unmodified so a retry is safe.
    pub async fn mark_complete(
        &self,
        session: Option<&Session>,
        module: ModuleNumber,
    ) -> Result<CompletionOutcome, SyncError> {
        if self.state.in_flight.load(Ordering::Acquire) {
            return Ok(CompletionOutcome::Busy);
        }
        let Some(session) = session else {
            return Ok(CompletionOutcome::NoSession);
        };

        let existing = self
            .state
            .records
            .borrow()
            .iter()
            .find(|record| record.matches(&session.username, module))
            .cloned();
        if let Some(record) = &existing {
            if record.completed {
                return Ok(CompletionOutcome::AlreadyCompleted);
            }
        }

        if self.state.in_flight.swap(true, Ordering::AcqRel) {
            return Ok(CompletionOutcome::Busy);
        }
        let result = self.push_write(existing, &session.username, module).await;
        self.state.in_flight.store(false, Ordering::Release);
        result
    }

    async fn push_write(
        &self,
        existing: Option<ProgressRecord>,
        username: &str,
        module: ModuleNumber,
    ) -> Result<CompletionOutcome, SyncError> {
        let now = self.clock.now();
        let record = match existing {
            Some(mut record) => {
                record.completed = true;
                record.completed_at = Some(now);
                if let Err(err) = self.sync.update(&record).await {
                    warn!(module = %module, "progress update rejected: {err}");
                    return Err(err);
                }
                record
            }
            None => {
                let record = ProgressRecord::completed_now(username, module, now);
                if let Err(err) = self.sync.create(&record).await {
                    warn!(module = %module, "progress create rejected: {err}");
                    return Err(err);
                }
                record
            }
        };

        self.apply_local(record);
        Ok(CompletionOutcome::Completed)
    }

    /// Fold an accepted write into the mirror without waiting for the
    /// collaborator's echo.
    fn apply_local(&self, record: ProgressRecord) {
        self.state.records.send_modify(|records| {
            match records
                .iter_mut()
                .find(|existing| existing.matches(&record.username, record.module_number))
            {
                Some(slot) => *slot = record,
                None => records.push(record),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::Role;
    use portal_core::time::{fixed_clock, fixed_now};
    use storage::sync::InMemoryProgressSync;

    fn session(username: &str) -> Session {
        Session {
            username: username.into(),
            full_name: username.into(),
            role: Role::User,
            email: format!("{username}@sekolah.id"),
            school: "SMPN 1".into(),
        }
    }

    fn module(value: u8) -> ModuleNumber {
        ModuleNumber::new(value).unwrap()
    }

    fn build() -> (ProgressService, Arc<InMemoryProgressSync>) {
        let sync = Arc::new(InMemoryProgressSync::new());
        let service = ProgressService::new(
            fixed_clock(),
            Arc::clone(&sync) as Arc<dyn ProgressSync>,
        );
        (service, sync)
    }

    #[tokio::test]
    async fn double_completion_writes_exactly_once() {
        let (service, sync) = build();
        service.init().await.unwrap();
        let user = session("budi");

        let first = service
            .mark_complete(Some(&user), module(3))
            .await
            .unwrap();
        assert_eq!(first, CompletionOutcome::Completed);
        assert_eq!(sync.create_count(), 1);
        assert_eq!(sync.update_count(), 0);

        let second = service
            .mark_complete(Some(&user), module(3))
            .await
            .unwrap();
        assert_eq!(second, CompletionOutcome::AlreadyCompleted);
        assert_eq!(sync.create_count(), 1);
        assert_eq!(sync.update_count(), 0);
        assert_eq!(sync.records().len(), 1);
    }

    #[tokio::test]
    async fn without_a_session_nothing_happens() {
        let (service, sync) = build();
        let outcome = service.mark_complete(None, module(1)).await.unwrap();
        assert_eq!(outcome, CompletionOutcome::NoSession);
        assert!(sync.records().is_empty());
    }

    #[tokio::test]
    async fn incomplete_record_is_mutated_not_recreated() {
        let mut seeded = ProgressRecord::completed_now("budi", module(2), fixed_now());
        seeded.completed = false;
        seeded.completed_at = None;
        let sync = Arc::new(InMemoryProgressSync::with_records(vec![seeded]));
        let service = ProgressService::new(
            fixed_clock(),
            Arc::clone(&sync) as Arc<dyn ProgressSync>,
        );
        service.init().await.unwrap();

        let outcome = service
            .mark_complete(Some(&session("budi")), module(2))
            .await
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed);
        assert_eq!(sync.create_count(), 0);
        assert_eq!(sync.update_count(), 1);

        let records = sync.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].completed);
        assert_eq!(records[0].completed_at, Some(fixed_now()));
    }

    #[tokio::test]
    async fn rejected_write_leaves_the_mirror_unmodified() {
        let (service, sync) = build();
        service.init().await.unwrap();
        sync.fail_writes(true);

        let err = service
            .mark_complete(Some(&session("budi")), module(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Rejected));
        assert!(service.records().is_empty());

        // The guard was released, so a retry succeeds.
        sync.fail_writes(false);
        let outcome = service
            .mark_complete(Some(&session("budi")), module(1))
            .await
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed);
    }

    #[tokio::test]
    async fn remote_push_replaces_the_mirror_and_wakes_watchers() {
        let (service, sync) = build();
        service.init().await.unwrap();
        let mut watcher = service.watch();
        watcher.mark_unchanged();

        sync.push_snapshot(vec![
            ProgressRecord::completed_now("budi", module(1), fixed_now()),
            ProgressRecord::completed_now("siti", module(2), fixed_now()),
        ]);

        assert!(watcher.has_changed().unwrap());
        assert_eq!(service.records().len(), 2);
    }

    /// Collaborator whose writes park until released, to hold the in-flight
    /// flag open.
    struct GatedSync {
        release: tokio::sync::Notify,
        inner: InMemoryProgressSync,
    }

    impl GatedSync {
        fn new() -> Self {
            Self {
                release: tokio::sync::Notify::new(),
                inner: InMemoryProgressSync::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl ProgressSync for GatedSync {
        async fn init(
            &self,
            handler: Arc<dyn storage::sync::ProgressHandler>,
        ) -> Result<(), SyncError> {
            self.inner.init(handler).await
        }

        async fn create(&self, record: &ProgressRecord) -> Result<(), SyncError> {
            self.release.notified().await;
            self.inner.create(record).await
        }

        async fn update(&self, record: &ProgressRecord) -> Result<(), SyncError> {
            self.release.notified().await;
            self.inner.update(record).await
        }
    }

    #[tokio::test]
    async fn concurrent_completion_is_dropped_while_one_is_in_flight() {
        let gated = Arc::new(GatedSync::new());
        let service = Arc::new(ProgressService::new(
            fixed_clock(),
            Arc::clone(&gated) as Arc<dyn ProgressSync>,
        ));

        let first = {
            let service = Arc::clone(&service);
            let user = session("budi");
            tokio::spawn(async move { service.mark_complete(Some(&user), module(1)).await })
        };
        // Let the first write reach the collaborator and park there.
        tokio::task::yield_now().await;

        // The guard is coarse: a different module is blocked too.
        let second = service
            .mark_complete(Some(&session("budi")), module(2))
            .await
            .unwrap();
        assert_eq!(second, CompletionOutcome::Busy);

        gated.release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed);
    }

    #[tokio::test]
    async fn completions_are_scoped_per_user() {
        let (service, sync) = build();
        service.init().await.unwrap();

        service
            .mark_complete(Some(&session("budi")), module(1))
            .await
            .unwrap();
        let outcome = service
            .mark_complete(Some(&session("siti")), module(1))
            .await
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed);
        assert_eq!(sync.create_count(), 2);
    }
}
