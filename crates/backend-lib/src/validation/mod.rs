// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Request body validation.

use memberarea_common::{ChangePasswordRequest, SignupRequest};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Common validation constants
const MIN_USER_NAME_LENGTH: usize = 1;
const MAX_USER_NAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Possible validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("The new passwords do not match")]
    ConfirmationMismatch,

    #[error("The new password must differ from the current password")]
    PasswordUnchanged,
}

impl ValidationError {
    /// Request field the error belongs to, using the wire-level key names.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidUserName(_) => Some("name"),
            ValidationError::InvalidEmail(_) => Some("email"),
            ValidationError::InvalidPassword(_) => Some("password"),
            ValidationError::ConfirmationMismatch => Some("confirmNewPassword"),
            ValidationError::PasswordUnchanged => Some("newPassword"),
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a display name
pub fn validate_user_name(name: &str) -> ValidationResult<&str> {
    let trimmed = name.trim();
    if trimmed.len() < MIN_USER_NAME_LENGTH {
        return Err(ValidationError::InvalidUserName(
            "User name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_USER_NAME_LENGTH {
        return Err(ValidationError::InvalidUserName(format!(
            "User name cannot exceed {MAX_USER_NAME_LENGTH} characters"
        )));
    }
    Ok(name)
}

/// Validate an email address
pub fn validate_email(email: &str) -> ValidationResult<&str> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "Email address cannot be empty".to_string(),
        ));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail(format!(
            "Email address cannot exceed {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail(
            "Invalid email address format".to_string(),
        ));
    }
    Ok(email)
}

/// Validate a password against the length bounds
pub fn validate_password(password: &str) -> ValidationResult<&str> {
    let char_count = password.chars().count();
    if char_count < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if char_count > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "Password cannot exceed {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(password)
}

/// Validate a signup request body
pub fn validate_signup(req: &SignupRequest) -> ValidationResult<()> {
    validate_user_name(&req.name)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    Ok(())
}

/// Validate a change-password request body.
///
/// The confirmation must match the new password, and the new password must
/// actually change something; both are field-level errors.
pub fn validate_change_password(req: &ChangePasswordRequest) -> ValidationResult<()> {
    validate_password(&req.new_password)?;
    if req.new_password != req.confirm_new_password {
        return Err(ValidationError::ConfirmationMismatch);
    }
    if req.current_password == req.new_password {
        return Err(ValidationError::PasswordUnchanged);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change_request(current: &str, new: &str, confirm: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_new_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_validate_user_name() {
        assert!(validate_user_name("Alice").is_ok());
        assert!(validate_user_name("高橋 太郎").is_ok());

        assert!(matches!(
            validate_user_name(""),
            Err(ValidationError::InvalidUserName(_))
        ));
        assert!(matches!(
            validate_user_name("   "),
            Err(ValidationError::InvalidUserName(_))
        ));

        let long_name = "a".repeat(51);
        assert!(matches!(
            validate_user_name(&long_name),
            Err(ValidationError::InvalidUserName(_))
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.co.uk").is_ok());

        assert!(matches!(
            validate_email(""),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_email("test.example.com"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_email("test@"),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_email("test@example"),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_validate_password_bounds() {
        assert!(validate_password("Password1").is_ok());
        assert!(validate_password("12345678").is_ok());

        assert!(matches!(
            validate_password("Short1!"),
            Err(ValidationError::InvalidPassword(_))
        ));
        let long_password = "a".repeat(129);
        assert!(matches!(
            validate_password(&long_password),
            Err(ValidationError::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_validate_signup() {
        let valid = SignupRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Password123!".to_string(),
        };
        assert!(validate_signup(&valid).is_ok());

        let mut invalid = valid.clone();
        invalid.email = "nope".to_string();
        assert!(validate_signup(&invalid).is_err());
    }

    #[test]
    fn test_change_password_confirmation_mismatch() {
        let err = validate_change_password(&change_request(
            "OldPass123!",
            "NewPass123!",
            "Different123!",
        ))
        .unwrap_err();
        assert!(matches!(err, ValidationError::ConfirmationMismatch));
        assert_eq!(err.field(), Some("confirmNewPassword"));
    }

    #[test]
    fn test_change_password_must_change() {
        let err = validate_change_password(&change_request(
            "SamePass123!",
            "SamePass123!",
            "SamePass123!",
        ))
        .unwrap_err();
        assert!(matches!(err, ValidationError::PasswordUnchanged));
        assert_eq!(err.field(), Some("newPassword"));
    }

    #[test]
    fn test_change_password_valid() {
        assert!(validate_change_password(&change_request(
            "OldPass123!",
            "NewPass123!",
            "NewPass123!",
        ))
        .is_ok());
    }
}
