use std::collections::HashMap;

/// Aliases probed when matching a submitted username against a directory row.
///
/// First matching alias wins; the scan is case-insensitive on values but the
/// header spellings themselves are exact.
pub const USERNAME_MATCH_ALIASES: [&str; 6] =
    ["username", "Username", "user", "User", "nama", "Nama"];

/// A single row of the remote user directory.
///
/// Headers are free-form and nothing is validated: any field may be absent,
/// and the same logical field may arrive under several spellings. Empty
/// string values are treated as absent everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    fields: HashMap<String, String>,
}

impl UserRecord {
    #[must_use]
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Returns the value stored under `key`, treating empty strings as absent.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves a canonical field through an ordered list of accepted header
    /// spellings; the first present, non-empty source wins.
    #[must_use]
    pub fn resolve(&self, sources: &[&str]) -> Option<&str> {
        sources.iter().find_map(|key| self.field(key))
    }

    /// Whether this row matches `submitted` under any of the username
    /// aliases, compared case-insensitively.
    #[must_use]
    pub fn matches_username(&self, submitted: &str) -> bool {
        USERNAME_MATCH_ALIASES
            .iter()
            .any(|alias| match self.field(alias) {
                Some(value) => value.eq_ignore_ascii_case(submitted),
                None => false,
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
