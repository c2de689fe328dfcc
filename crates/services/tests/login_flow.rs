use std::sync::Arc;

use async_trait::async_trait;
use portal_core::model::{ModuleNumber, completion_percent};
use portal_core::time::fixed_clock;
use services::directory::{DirectoryService, DirectorySource};
use services::error::FetchError;
use services::progress::CompletionOutcome;
use services::{AuthService, ProgressService};
use storage::session_store::{InMemorySessionStore, SessionStore};
use storage::sync::{InMemoryProgressSync, ProgressSync};

struct SheetSource(&'static str);

#[async_trait]
impl DirectorySource for SheetSource {
    async fn fetch_csv(&self) -> Result<String, FetchError> {
        Ok(self.0.to_string())
    }

    async fn fetch_unreadable(&self) {}
}

const SHEET: &str = "username,nama_lengkap,peran,email,nama_sekolah\n\
                     budi,Budi Santoso,user,budi@sekolah.id,SMPN 1\n";

#[tokio::test]
async fn login_complete_module_logout_restore() {
    let store = Arc::new(InMemorySessionStore::new());
    let sync = Arc::new(InMemoryProgressSync::new());

    let auth = AuthService::new(
        DirectoryService::new(Arc::new(SheetSource(SHEET)) as Arc<dyn DirectorySource>),
        Arc::clone(&store) as Arc<dyn SessionStore>,
        "https://example.invalid/exec",
    );
    let progress = ProgressService::new(
        fixed_clock(),
        Arc::clone(&sync) as Arc<dyn ProgressSync>,
    );
    progress.init().await.expect("init sync");

    // Login establishes and persists the session.
    let session = auth.login("Budi", "whatever").await.expect("login");
    assert_eq!(session.username, "budi");
    assert!(store.load().await.expect("load").is_some());

    // Completing module 3 creates exactly one record and moves the user to
    // one fifth of the catalog.
    let outcome = progress
        .mark_complete(Some(&session), ModuleNumber::new(3).expect("module"))
        .await
        .expect("mark complete");
    assert_eq!(outcome, CompletionOutcome::Completed);
    assert_eq!(sync.create_count(), 1);

    let records = progress.records();
    assert_eq!(completion_percent(&records, "budi"), 20);
    assert_eq!(records[0].module_name, "Etika dan Resiko KA");

    // Completing it again is a no-op.
    let outcome = progress
        .mark_complete(Some(&session), ModuleNumber::new(3).expect("module"))
        .await
        .expect("mark complete again");
    assert_eq!(outcome, CompletionOutcome::AlreadyCompleted);
    assert_eq!(sync.create_count(), 1);

    // Logout removes the persisted key; a restore afterwards stays
    // unauthenticated.
    auth.logout().await.expect("logout");
    assert!(auth.restore().await.expect("restore").is_none());
}
