//! Connection pool setup and table bootstrap.

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::settings::Database;

/// Open a connection pool to the configured database.
pub async fn connect(settings: &Database) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        "Connecting to postgres://{}@{}:{}/{}",
        settings.user,
        settings.host,
        settings.port,
        settings.database
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.url())
        .await
}

/// Initialize the database with tables if they don't exist
pub async fn init_database(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS registrations (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            mobile TEXT NOT NULL,
            event TEXT NOT NULL,
            password TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );",
    )
    .execute(pool)
    .await
    .context("Failed to create registrations table")?;
    Ok(())
}
