//! User infrastructure module
//!
//! This module provides implementations for registration and login,
//! including SHA-256 password digests, in-memory and PostgreSQL repositories,
//! and the user service.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{PasswordHasher, Sha256Hasher, DIGEST_HEX_LENGTH};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{RegisterRequest, UserService};
