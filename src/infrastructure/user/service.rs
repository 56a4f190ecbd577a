//! User service for registration and login

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::user::{
    normalize_email, validate_email, validate_name, validate_password, AuthError, NewUser,
    UserRepository,
};

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User service for registration and login
///
/// The repository is injected explicitly; the service holds no other state.
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository + ?Sized, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user, returning the stored email
    #[instrument(skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> Result<String, AuthError> {
        // Policy first: a weak password never reaches storage
        validate_password(&request.password)?;

        let name = request.name.trim();
        validate_name(name)?;

        let email = normalize_email(&request.email);
        validate_email(&email)?;

        let digest = self.hasher.hash(&request.password);

        let id = self
            .repository
            .insert(NewUser::new(name, email.as_str(), digest))
            .await
            .map_err(|e| {
                warn!(email = %email, error = %e, "Registration failed");
                AuthError::from_insert_failure(e)
            })?;

        info!(user_id = %id, email = %email, "User registered");

        Ok(email)
    }

    /// Authenticate a user with email and password, returning the display name
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = normalize_email(email);
        validate_email(&email)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(AuthError::from_lookup_failure)?
            .ok_or_else(|| {
                debug!("No user for email");
                AuthError::UserNotFound
            })?;

        if !self.hasher.verify(password, user.password_digest()) {
            debug!(user_id = %user.id(), "Password digest mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id(), "User logged in");

        Ok(user.name().to_string())
    }

    /// Check that the storage collaborator is reachable
    pub async fn check_storage(&self) -> Result<(), AuthError> {
        self.repository
            .ping()
            .await
            .map_err(AuthError::from_lookup_failure)
    }
}
