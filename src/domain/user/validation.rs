//! User validation utilities
//!
//! Holds the password strength policy plus the field checks applied to a
//! registration before anything is written to storage.

use thiserror::Error;
use validator::ValidateEmail;

/// Reasons a password fails the strength policy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is too short. Minimum length is {0} characters")]
    TooShort(usize),

    #[error("Password must contain at least one uppercase letter (A-Z)")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter (a-z)")]
    MissingLowercase,

    #[error("Password must contain at least one digit (0-9)")]
    MissingDigit,

    #[error("Password must contain at least one of the symbols {0}")]
    MissingSymbol(&'static str),
}

/// Errors that can occur while validating registration fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),
}

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 255;

/// Symbols accepted by the password policy
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*,";

/// Validate a password against the strength policy
///
/// Rules, checked in order:
/// - At least 8 characters
/// - At least one ASCII uppercase letter
/// - At least one ASCII lowercase letter
/// - At least one ASCII digit
/// - At least one symbol from `!@#$%^&*,`
///
/// Letters outside ASCII never satisfy the letter rules.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }

    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(PasswordPolicyError::MissingSymbol(PASSWORD_SYMBOLS));
    }

    Ok(())
}

/// Pass/fail form of [`validate_password`]
pub fn is_strong_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

/// Validate a display name (already trimmed)
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address (already normalized)
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    let candidate = email.to_string();

    if !candidate.validate_email() {
        return Err(UserValidationError::InvalidEmail(candidate));
    }

    Ok(())
}

/// Normalize an email for storage and lookup
///
/// Trims surrounding whitespace and lowercases the domain part. The local
/// part is case-sensitive and left untouched.
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();

    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_ascii_lowercase()),
        None => trimmed.to_string(),
    }
}
