//! Domain layer - core types and rules

pub mod error;
pub mod user;

pub use error::DomainError;
