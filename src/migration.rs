//! Startup DDL: create the `users` table and its name index if they do not exist.

use crate::config::Backend;
use sqlx::AnyPool;

fn users_table_ddl(backend: Backend) -> &'static str {
    match backend {
        Backend::Postgres => {
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#
        }
        Backend::Sqlite => {
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#
        }
    }
}

const USERS_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_users_name ON users (name)";

/// Idempotent. Not retried: the caller treats an error as fatal.
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> Result<(), sqlx::Error> {
    sqlx::query(users_table_ddl(backend)).execute(pool).await?;
    sqlx::query(USERS_NAME_INDEX).execute(pool).await?;
    tracing::info!(?backend, "schema ready");
    Ok(())
}
