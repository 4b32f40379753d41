//! Process settings from environment variables.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://kubsu.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;
pub const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 30_000;

/// Database engine, selected by the scheme of `DATABASE_URL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(ConfigError::UnsupportedDatabase(url.to_string()))
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub backend: Backend,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit: usize,
    /// How long a request waits for a pooled connection before failing.
    pub acquire_timeout: Duration,
}

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let backend = Backend::from_url(&database_url)?;
        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", || {
            DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.into(),
            })
        })?;
        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", || Ok(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidEnv {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let body_limit: usize = parse_or(&lookup, "BODY_LIMIT_BYTES", || Ok(DEFAULT_BODY_LIMIT))?;
        let acquire_timeout_ms: u64 =
            parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_MS", || Ok(DEFAULT_ACQUIRE_TIMEOUT_MS))?;
        Ok(ServiceConfig {
            database_url,
            backend,
            bind_addr,
            max_connections,
            body_limit,
            acquire_timeout: Duration::from_millis(acquire_timeout_ms),
        })
    }

    /// In-memory SQLite lives per connection, so the pool must hold exactly one.
    pub fn is_in_memory(&self) -> bool {
        self.backend == Backend::Sqlite && self.database_url.contains(":memory:")
    }

    /// Connections the pool actually holds.
    pub fn pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections
        }
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnv { key, value: raw }),
        None => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServiceConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.backend, Backend::Sqlite);
        assert_eq!(cfg.bind_addr.port(), 8000);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(cfg.acquire_timeout, Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS));
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("DATABASE_URL", "postgresql://db/kubsu"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("BODY_LIMIT_BYTES", "1024"),
            ("DB_ACQUIRE_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(cfg.backend, Backend::Postgres);
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.body_limit, 1024);
        assert_eq!(cfg.acquire_timeout, Duration::from_millis(250));
        assert!(!cfg.is_in_memory());
        assert_eq!(cfg.pool_size(), 12);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::InvalidEnv { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidEnv { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::InvalidEnv { key: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(Backend::from_url("postgres://localhost/kubsu").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(matches!(
            Backend::from_url("mysql://localhost/kubsu"),
            Err(ConfigError::UnsupportedDatabase(_))
        ));
    }

    #[test]
    fn memory_sqlite_is_detected() {
        let cfg = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("DB_MAX_CONNECTIONS", "8")]).unwrap();
        assert!(cfg.is_in_memory());
        assert_eq!(cfg.pool_size(), 1);
    }
}
