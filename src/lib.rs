//! Credential Gateway
//!
//! A small HTTP service that registers users and verifies their logins
//! against a relational credential store.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::user::UserRepository;
use infrastructure::storage::{StorageFactory, StorageHandle};
use infrastructure::user::{Sha256Hasher, UserService};

/// Build application state over an already opened storage backend
pub fn create_app_state(storage: &StorageHandle) -> AppState {
    let service: UserService<dyn UserRepository, Sha256Hasher> =
        UserService::new(storage.users(), Arc::new(Sha256Hasher::new()));

    AppState::new(Arc::new(service))
}

/// Open the configured storage backend and build application state over it
///
/// The returned handle must be closed by the caller at shutdown.
pub async fn create_app_state_with_config(
    config: &AppConfig,
) -> anyhow::Result<(AppState, StorageHandle)> {
    let storage_config = config.storage_config()?;
    let storage = StorageFactory::open(&storage_config).await?;

    Ok((create_app_state(&storage), storage))
}
