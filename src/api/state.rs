//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{AuthError, UserRepository};
use crate::infrastructure::user::{PasswordHasher, RegisterRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for registration and login operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Register a user, returning the stored email
    async fn register(&self, request: RegisterRequest) -> Result<String, AuthError>;

    /// Verify a login, returning the display name
    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Check that storage is reachable
    async fn check_storage(&self) -> Result<(), AuthError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + ?Sized + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterRequest) -> Result<String, AuthError> {
        UserService::register(self, request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        UserService::login(self, email, password).await
    }

    async fn check_storage(&self) -> Result<(), AuthError> {
        UserService::check_storage(self).await
    }
}
