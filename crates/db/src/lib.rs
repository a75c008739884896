//! Persistence layer for the random web catalog.
//!
//! - [`models`]: row structs and create DTOs.
//! - [`repositories`]: zero-sized repos issuing SQL against a `PgPool`.
//! - [`store`]: the [`CatalogStore`] trait and its PostgreSQL and in-memory
//!   backends.
//! - [`catalog`]: the [`Catalog`] facade implementing the public operations
//!   on top of any store.

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod models;
pub mod repositories;
pub mod store;

pub use catalog::Catalog;
pub use store::{CatalogStore, MemoryCatalogStore, PgCatalogStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
