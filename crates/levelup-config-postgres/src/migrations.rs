//! Schema migrations

use sqlx::PgPool;
use tracing::info;

use levelup_core::{Error, Result};

/// Create the settings tables if they do not exist.
///
/// Called by `PgSettingsStore::new`; call it directly when building stores
/// from an existing or lazily-connected pool.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS levelup_settings (
            component TEXT NOT NULL,
            name TEXT NOT NULL,
            value JSONB NOT NULL,
            updated_at TIMESTAMPTZ DEFAULT NOW(),
            PRIMARY KEY (component, name)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| Error::Database(format!("Failed to create levelup_settings table: {}", e)))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS levelup_course_settings (
            course_id BIGINT NOT NULL,
            name TEXT NOT NULL,
            value JSONB NOT NULL,
            updated_at TIMESTAMPTZ DEFAULT NOW(),
            PRIMARY KEY (course_id, name)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| {
        Error::Database(format!(
            "Failed to create levelup_course_settings table: {}",
            e
        ))
    })?;

    info!("Settings schema migrations complete");
    Ok(())
}
