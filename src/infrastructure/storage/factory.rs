//! Storage factory for runtime storage selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::migrations::run_migrations;
use super::postgres::{connect_pool, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// An opened storage backend
///
/// Owns the connection pool (if any) so it can be closed explicitly at
/// shutdown.
#[derive(Clone)]
pub struct StorageHandle {
    users: Arc<dyn UserRepository>,
    pool: Option<PgPool>,
}

impl std::fmt::Debug for StorageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageHandle")
            .field("pooled", &self.pool.is_some())
            .finish()
    }
}

impl StorageHandle {
    /// Wrap a repository that needs no pool
    pub fn from_repository(users: Arc<dyn UserRepository>) -> Self {
        Self { users, pool: None }
    }

    /// The user repository backed by this storage
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    /// The PostgreSQL pool, when the backend is PostgreSQL
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Close the underlying pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("PostgreSQL pool closed");
        }
    }
}

/// Factory for opening storage backends
pub struct StorageFactory;

impl StorageFactory {
    /// Opens the configured backend; PostgreSQL is migrated before use
    pub async fn open(config: &StorageConfig) -> Result<StorageHandle, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(Self::in_memory()),
            StorageConfig::Postgres(pg_config) => {
                let pool = connect_pool(pg_config).await?;
                let applied = run_migrations(&pool).await?;
                info!(applied, "Database schema is up to date");

                Ok(StorageHandle {
                    users: Arc::new(PostgresUserRepository::new(pool.clone())),
                    pool: Some(pool),
                })
            }
        }
    }

    /// Creates a fresh in-memory backend
    pub fn in_memory() -> StorageHandle {
        StorageHandle::from_repository(Arc::new(InMemoryUserRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::NewUser;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("in_memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("PostgreSQL"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("sqlite"), None);
    }

    #[test]
    fn test_storage_config_types() {
        assert_eq!(StorageConfig::in_memory().storage_type(), StorageType::InMemory);

        let postgres = StorageConfig::postgres(PostgresConfig::new("postgres://localhost/test"));
        assert_eq!(postgres.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_open_in_memory() {
        let handle = StorageFactory::open(&StorageConfig::in_memory()).await.unwrap();

        assert!(handle.pool().is_none());

        let users = handle.users();
        users
            .insert(NewUser::new("Ana", "ana@x.com", "0".repeat(64)))
            .await
            .unwrap();

        // Handles share the same repository
        let found = handle.users().find_by_email("ana@x.com").await.unwrap();
        assert!(found.is_some());

        handle.close().await;
    }
}
