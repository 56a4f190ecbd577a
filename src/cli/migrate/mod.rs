//! Migrate command - applies the database schema and exits

use sqlx::PgPool;
use tracing::info;

use crate::domain::DomainError;
use crate::infrastructure::storage::{connect_pool, run_migrations, PostgresMigrator, StorageConfig};

/// Apply pending migrations to the configured PostgreSQL database
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let pg_config = match config.storage_config()? {
        StorageConfig::Postgres(pg_config) => pg_config,
        StorageConfig::InMemory => {
            anyhow::bail!("The in-memory backend has no schema to migrate");
        }
    };

    let pool = connect_pool(&pg_config).await?;
    let result = migrate(&pool).await;
    pool.close().await;

    let (applied, version) = result?;
    match version {
        Some(version) => info!(applied, version, "Migrations complete"),
        None => info!(applied, "Migrations complete, no schema version recorded"),
    }

    Ok(())
}

/// Run pending migrations and report the resulting schema version
async fn migrate(pool: &PgPool) -> Result<(usize, Option<i64>), DomainError> {
    let applied = run_migrations(pool).await?;
    let version = PostgresMigrator::new(pool.clone()).current_version().await?;

    Ok((applied, version))
}
