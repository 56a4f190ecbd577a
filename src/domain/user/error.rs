//! Outcomes of the registration and login flows

use thiserror::Error;

use super::validation::{PasswordPolicyError, UserValidationError};
use crate::domain::DomainError;

/// Errors surfaced by the registration and login flows
///
/// All variants except `Storage` and `Unavailable` are expected, user-facing
/// outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Weak password: {0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UserValidationError),

    #[error("Registration failed: {cause}")]
    RegistrationFailed { cause: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Map a storage failure raised while inserting a new record
    ///
    /// Conflicts and query-level failures are registration failures; a store
    /// that cannot be reached is not.
    pub fn from_insert_failure(err: DomainError) -> Self {
        match err {
            DomainError::Unavailable { message } => Self::Unavailable(message),
            DomainError::Conflict { message } | DomainError::Storage { message } => {
                Self::RegistrationFailed { cause: message }
            }
            other => Self::RegistrationFailed {
                cause: other.to_string(),
            },
        }
    }

    /// Map a storage failure raised while looking up a record
    ///
    /// Only an unreachable store is `Unavailable`; a failed query is a
    /// server-side storage failure.
    pub fn from_lookup_failure(err: DomainError) -> Self {
        match err {
            DomainError::Unavailable { message } => Self::Unavailable(message),
            DomainError::Conflict { message }
            | DomainError::Storage { message }
            | DomainError::Configuration { message } => Self::Storage(message),
        }
    }
}
