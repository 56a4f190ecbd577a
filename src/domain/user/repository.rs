//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Storage collaborator for credential records
///
/// Implementations must enforce email uniqueness atomically: two concurrent
/// inserts of the same email yield exactly one success.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record, returning its storage-assigned ID
    ///
    /// Fails with [`DomainError::Conflict`] if the email is already present.
    async fn insert(&self, user: NewUser) -> Result<UserId, DomainError>;

    /// Find a record by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
