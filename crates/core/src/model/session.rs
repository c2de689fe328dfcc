use serde::{Deserialize, Serialize};

use crate::model::user::UserRecord;

/// Ordered header spellings accepted for each canonical session field.
///
/// The directory carries no schema, so every field is resolved through a
/// fallback chain before defaulting.
const USERNAME_SOURCES: &[&str] = &["username", "Username", "user", "User"];
const FULL_NAME_SOURCES: &[&str] = &["nama_lengkap", "Nama", "nama", "username", "Username"];
const ROLE_SOURCES: &[&str] = &["peran", "Peran", "role", "Role"];
const EMAIL_SOURCES: &[&str] = &["email", "Email"];
const SCHOOL_SOURCES: &[&str] = &["nama_sekolah", "Nama_sekolah", "sekolah", "Sekolah"];

/// Role carried by a session.
///
/// Only the exact string `"admin"` grants the admin role; any other value,
/// including other spellings, is a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub fn from_source(value: &str) -> Self {
        if value == "admin" { Self::Admin } else { Self::User }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// An authenticated session.
///
/// Serialized field names keep the original storage and wire shape
/// (`nama_lengkap`, `peran`, `nama_sekolah`), so a persisted session written
/// by the previous front end deserializes unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(rename = "nama_lengkap")]
    pub full_name: String,
    #[serde(rename = "peran")]
    pub role: Role,
    pub email: String,
    #[serde(rename = "nama_sekolah")]
    pub school: String,
}

impl Session {
    /// Builds a session from a matched directory row, resolving each field
    /// through its alias chain before falling back to a default.
    ///
    /// The default email is derived from the *submitted* username, not the
    /// resolved one.
    #[must_use]
    pub fn from_directory_record(record: &UserRecord, submitted_username: &str) -> Self {
        let username = record
            .resolve(USERNAME_SOURCES)
            .unwrap_or(submitted_username)
            .to_string();
        let full_name = record
            .resolve(FULL_NAME_SOURCES)
            .unwrap_or("User")
            .to_string();
        let role = record
            .resolve(ROLE_SOURCES)
            .map_or(Role::User, Role::from_source);
        let email = record.resolve(EMAIL_SOURCES).map_or_else(
            || format!("{submitted_username}@academy.com"),
            str::to_string,
        );
        let school = record
            .resolve(SCHOOL_SOURCES)
            .unwrap_or("Sekolah")
            .to_string();

        Self {
            username,
            full_name,
            role,
            email,
            school,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> UserRecord {
        UserRecord::from_fields(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn builds_session_from_canonical_headers() {
        let row = record(&[
            ("username", "budi"),
            ("nama_lengkap", "Budi Santoso"),
            ("peran", "admin"),
            ("email", "budi@sekolah.id"),
            ("nama_sekolah", "SMPN 1"),
        ]);

        let session = Session::from_directory_record(&row, "BUDI");
        assert_eq!(session.username, "budi");
        assert_eq!(session.full_name, "Budi Santoso");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.email, "budi@sekolah.id");
        assert_eq!(session.school, "SMPN 1");
    }

    #[test]
    fn falls_back_through_alias_chains() {
        let row = record(&[("User", "siti"), ("Nama", "Siti"), ("Sekolah", "SDN 2")]);

        let session = Session::from_directory_record(&row, "siti");
        assert_eq!(session.username, "siti");
        assert_eq!(session.full_name, "Siti");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.email, "siti@academy.com");
        assert_eq!(session.school, "SDN 2");
    }

    #[test]
    fn defaults_apply_for_a_bare_row() {
        let session = Session::from_directory_record(&UserRecord::default(), "andi");
        assert_eq!(session.username, "andi");
        assert_eq!(session.full_name, "User");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.email, "andi@academy.com");
        assert_eq!(session.school, "Sekolah");
    }

    #[test]
    fn default_email_uses_submitted_username() {
        // The resolved username may come from a different header than the
        // one the learner typed; the email default still uses the typed one.
        let row = record(&[("username", "budi.s")]);
        let session = Session::from_directory_record(&row, "Budi.S");
        assert_eq!(session.username, "budi.s");
        assert_eq!(session.email, "Budi.S@academy.com");
    }

    #[test]
    fn role_requires_exact_admin_string() {
        assert_eq!(Role::from_source("admin"), Role::Admin);
        assert_eq!(Role::from_source("Admin"), Role::User);
        assert_eq!(Role::from_source("ADMIN"), Role::User);
        assert_eq!(Role::from_source("guru"), Role::User);
    }

    #[test]
    fn serialized_shape_keeps_original_keys() {
        let session = Session {
            username: "budi".into(),
            full_name: "Budi Santoso".into(),
            role: Role::User,
            email: "budi@sekolah.id".into(),
            school: "SMPN 1".into(),
        };

        let json = serde_json::to_value(&session).unwrap();
        let object = json.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert!(keys.contains(&"nama_lengkap"));
        assert!(keys.contains(&"peran"));
        assert!(keys.contains(&"nama_sekolah"));
        assert_eq!(object["peran"], "user");

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn empty_fields_do_not_shadow_later_aliases() {
        let mut fields = HashMap::new();
        fields.insert("nama_lengkap".to_string(), String::new());
        fields.insert("Nama".to_string(), "Siti".to_string());
        fields.insert("username".to_string(), "siti".to_string());
        let session = Session::from_directory_record(&UserRecord::from_fields(fields), "siti");
        assert_eq!(session.full_name, "Siti");
    }
}
