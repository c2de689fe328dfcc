//! Remote user directory loading.
//!
//! The directory is the published CSV export of a spreadsheet. It is loaded
//! before every login attempt — never cached — so edits to the sheet between
//! attempts are picked up.

use std::sync::Arc;

use async_trait::async_trait;
use portal_core::csv;
use portal_core::model::UserRecord;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Fetches the raw CSV body of the published user directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the CSV export.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` for a non-success response and
    /// `FetchError::Transport` for network failures.
    async fn fetch_csv(&self) -> Result<String, FetchError>;

    /// Degraded fallback request in a mode whose response cannot be read.
    ///
    /// This can never populate the directory; it exists so the failure path
    /// still completes the round trip the primary path attempted, instead of
    /// surfacing an unhandled failure.
    async fn fetch_unreadable(&self);
}

/// HTTP binding against the published spreadsheet CSV export.
pub struct HttpDirectorySource {
    client: Client,
    csv_url: String,
}

impl HttpDirectorySource {
    #[must_use]
    pub fn new(csv_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            csv_url: csv_url.into(),
        }
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch_csv(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.csv_url)
            .header(reqwest::header::ACCEPT, "text/csv")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn fetch_unreadable(&self) {
        // The body is deliberately never read.
        if let Err(err) = self.client.get(&self.csv_url).send().await {
            warn!("fallback directory request failed: {err}");
        }
    }
}

/// Loads the user directory for the authentication controller.
pub struct DirectoryService {
    source: Arc<dyn DirectorySource>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    /// Load the directory.
    ///
    /// The body is parsed with the primary parser; an empty result set is
    /// retried with the lenient parser. Any fetch failure issues one
    /// degraded no-read fallback request and degrades to an empty directory
    /// — the caller sees "no matching user", not a distinct fetch error.
    pub async fn load(&self) -> Vec<UserRecord> {
        match self.source.fetch_csv().await {
            Ok(body) => {
                let mut records = csv::parse(&body);
                if records.is_empty() {
                    debug!("primary parse yielded no records, retrying with lenient parser");
                    records = csv::parse_lenient(&body);
                }
                debug!(count = records.len(), "user directory loaded");
                records
            }
            Err(err) => {
                warn!("directory load failed: {err}");
                self.source.fetch_unreadable().await;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct StubSource {
        body: Result<String, ()>,
        pub fetches: AtomicUsize,
        pub fallbacks: AtomicUsize,
    }

    impl StubSource {
        pub(crate) fn ok(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                fetches: AtomicUsize::new(0),
                fallbacks: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                body: Err(()),
                fetches: AtomicUsize::new(0),
                fallbacks: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DirectorySource for StubSource {
        async fn fetch_csv(&self) -> Result<String, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.body
                .clone()
                .map_err(|()| FetchError::Transport("connection refused".into()))
        }

        async fn fetch_unreadable(&self) {
            self.fallbacks.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn loads_records_from_the_source() {
        let source = Arc::new(StubSource::ok("username,peran\nbudi,user\n"));
        let service = DirectoryService::new(Arc::clone(&source) as Arc<dyn DirectorySource>);

        let records = service.load().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("username"), Some("budi"));
        assert_eq!(source.fallbacks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_after_fallback() {
        let source = Arc::new(StubSource::failing());
        let service = DirectoryService::new(Arc::clone(&source) as Arc<dyn DirectorySource>);

        let records = service.load().await;
        assert!(records.is_empty());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(source.fallbacks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn header_only_body_yields_empty_without_fallback() {
        let source = Arc::new(StubSource::ok("username,peran\n"));
        let service = DirectoryService::new(Arc::clone(&source) as Arc<dyn DirectorySource>);

        assert!(service.load().await.is_empty());
        assert_eq!(source.fallbacks.load(Ordering::SeqCst), 0);
    }
}
