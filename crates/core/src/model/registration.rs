use crate::error::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Unvalidated registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub school: String,
}

/// A validated registration, ready to submit.
///
/// The check is deliberately shallow: every field non-blank after trimming,
/// password length, and an `@` somewhere in the email. Nothing stronger is
/// observed by the remote endpoint anyway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub school: String,
}

impl RegistrationDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and trim the draft into a submission payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRegistrationField` if any field is
    /// blank, `PasswordTooShort` for passwords under six characters, and
    /// `InvalidEmail` when the email carries no `@`.
    pub fn validate(self) -> Result<Registration, ValidationError> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();
        let password = self.password.trim().to_string();
        let full_name = self.full_name.trim().to_string();
        let school = self.school.trim().to_string();

        if username.is_empty()
            || email.is_empty()
            || password.is_empty()
            || full_name.is_empty()
            || school.is_empty()
        {
            return Err(ValidationError::MissingRegistrationField);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Registration {
            username,
            email,
            password,
            full_name,
            school,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            username: "budi".into(),
            email: "budi@sekolah.id".into(),
            password: "rahasia1".into(),
            full_name: "Budi Santoso".into(),
            school: "SMPN 1".into(),
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        let registration = draft().validate().unwrap();
        assert_eq!(registration.username, "budi");
        assert_eq!(registration.school, "SMPN 1");
    }

    #[test]
    fn trims_before_checking() {
        let mut input = draft();
        input.username = "  budi  ".into();
        assert_eq!(input.validate().unwrap().username, "budi");

        let mut input = draft();
        input.school = "   ".into();
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::MissingRegistrationField
        );
    }

    #[test]
    fn rejects_short_passwords() {
        let mut input = draft();
        input.password = "lima5".into();
        assert_eq!(
            input.validate().unwrap_err(),
            ValidationError::PasswordTooShort
        );
    }

    #[test]
    fn rejects_emails_without_at_sign() {
        let mut input = draft();
        input.email = "budi.sekolah.id".into();
        assert_eq!(input.validate().unwrap_err(), ValidationError::InvalidEmail);
    }
}
