//! Signup form state and validation.

use serde::{Deserialize, Serialize};

use crate::error::{SignupError, SignupResult};

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Who is signing up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Tutor,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Tutor => "Tutor",
        }
    }
}

/// Field values of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
}

impl SignupForm {
    /// Check the form, reporting the first problem found.
    pub fn validate(&self) -> SignupResult<()> {
        if self.name.trim().is_empty() {
            return Err(SignupError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SignupError::MissingField("email"));
        }
        if !email.contains('@') {
            return Err(SignupError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            name: "Aisha Rahman".into(),
            email: "aisha@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
            role: UserRole::Student,
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_password_mismatch() {
        let form = SignupForm {
            confirm_password: "correct horsf".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_required_fields() {
        let form = SignupForm {
            name: "  ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupError::MissingField("name")));

        let form = SignupForm {
            email: "aisha.example.com".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn test_short_password() {
        let form = SignupForm {
            password: "short".into(),
            confirm_password: "short".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn test_default_role_is_student() {
        assert_eq!(SignupForm::default().role, UserRole::Student);
    }
}
