//! Drawlist persistence layer.
//!
//! Models and repositories over PostgreSQL. All four state-changing
//! operations (join, leave, draw, respond) live here as single-
//! transaction repository methods: concurrent callers observe either the
//! full pre-state or the full post-state, never an interleaving. The
//! [`retry`] module adds bounded backoff on transient transaction
//! conflicts.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod retry;

pub type DbPool = sqlx::PgPool;

/// Errors surfaced by the repository layer.
///
/// Business-rule rejections are *not* errors -- they are outcome enum
/// variants in `drawlist_core`. This type only covers the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database operation failed.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A transaction kept conflicting with concurrent work and every
    /// bounded retry attempt was used up. Safe to retry from the caller.
    #[error("Transaction conflicted {attempts} times without committing")]
    RetriesExhausted { attempts: u32 },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
