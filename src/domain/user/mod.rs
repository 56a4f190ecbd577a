//! User domain
//!
//! This module provides domain types and traits for registration and login,
//! including the credential record, the password policy, flow errors and the
//! storage collaborator trait.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use error::AuthError;
pub use repository::UserRepository;
pub use validation::{
    is_strong_password, normalize_email, validate_email, validate_name, validate_password,
    PasswordPolicyError, UserValidationError, PASSWORD_SYMBOLS,
};

#[cfg(test)]
pub use repository::MockUserRepository;
