//! Connection pool and request-scoped sessions over the sqlx `Any` driver.

use crate::config::ServiceConfig;
use crate::error::AppError;
use sqlx::any::{install_default_drivers, Any, AnyPoolOptions};
use sqlx::{AnyConnection, AnyPool, Transaction};

fn pool_options(config: &ServiceConfig) -> AnyPoolOptions {
    let opts = AnyPoolOptions::new()
        .max_connections(config.pool_size())
        .acquire_timeout(config.acquire_timeout);
    if config.is_in_memory() {
        opts.min_connections(1).idle_timeout(None).max_lifetime(None)
    } else {
        opts
    }
}

/// Build the pool for `DATABASE_URL`. Connects eagerly so a bad URL fails startup.
pub async fn connect(config: &ServiceConfig) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();
    let pool = pool_options(config).connect(&config.database_url).await?;
    tracing::info!(backend = ?config.backend, max_connections = config.pool_size(), "database pool ready");
    Ok(pool)
}

/// Pool that only opens connections on first use.
pub fn connect_lazy(config: &ServiceConfig) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();
    pool_options(config).connect_lazy(&config.database_url)
}

/// One unit of work bound to a request. Holds a pooled connection inside a transaction.
///
/// `commit` makes the work durable. Dropping an uncommitted session rolls it back;
/// either way the connection goes back to the pool.
pub struct Session {
    tx: Transaction<'static, Any>,
}

impl Session {
    pub async fn begin(pool: &AnyPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Session { tx })
    }

    pub fn conn(&mut self) -> &mut AnyConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
