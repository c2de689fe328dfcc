use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

/// Published CSV export of the user directory sheet.
pub const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTVgEYMm48zb1iuM1muKnkNWBrL048eleda0IEsJabHyXmgpHZKdml9sVdm1FpN_Gc3pHC-ZU79pvV2/pub?gid=0&single=true&output=csv";

/// Apps Script endpoint used for registration and admin data.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbzUYHHvj0TH2ciz1HpVHR_OHJr1mQDOxtNPHDy9F2nyJHL0oDRhmZM0Q0oG0djE29KlVw/exec";

const DEFAULT_SESSION_FILE: &str = "session.json";

/// Remote endpoints and local paths for the portal client.
///
/// Defaults point at the production endpoints; everything can be overridden
/// through the environment (`PORTAL_SHEET_CSV_URL`, `PORTAL_API_URL`,
/// `PORTAL_SESSION_FILE`).
#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub sheet_csv_url: String,
    pub api_url: String,
    pub session_path: PathBuf,
}

impl PortalConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` when an endpoint override does not
    /// parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let sheet_csv_url =
            env::var("PORTAL_SHEET_CSV_URL").unwrap_or_else(|_| DEFAULT_SHEET_CSV_URL.into());
        let api_url = env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let session_path = env::var("PORTAL_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        let config = Self {
            sheet_csv_url,
            api_url,
            session_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both endpoints parse as URLs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` naming the offending endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, raw) in [
            ("sheet CSV", &self.sheet_csv_url),
            ("API", &self.api_url),
        ] {
            if Url::parse(raw).is_err() {
                return Err(ConfigError::InvalidUrl {
                    name,
                    raw: raw.clone(),
                });
            }
        }
        Ok(())
    }
}
