// src/utils/db_connect.rs

use anyhow::{Context, Result};
use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use log::info;
use std::time::Duration;
use tokio_postgres::{Config, NoTls};

use super::env::env_or;

pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Database settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub pool_max_size: u32,
    pub connection_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            dbname: "facilities".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            pool_max_size: 16,
            connection_timeout_secs: 15,
        }
    }
}

impl DbConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("POSTGRES_HOST").unwrap_or(defaults.host),
            port: env_or("POSTGRES_PORT", defaults.port),
            dbname: std::env::var("POSTGRES_DB").unwrap_or(defaults.dbname),
            user: std::env::var("POSTGRES_USER").unwrap_or(defaults.user),
            password: std::env::var("POSTGRES_PASSWORD").unwrap_or(defaults.password),
            pool_max_size: env_or("DB_POOL_MAX_SIZE", defaults.pool_max_size).max(1),
            connection_timeout_secs: env_or(
                "DB_CONNECTION_TIMEOUT_SECS",
                defaults.connection_timeout_secs,
            ),
        }
    }

    pub fn log_config(&self) {
        info!(
            "DB Config: Host={}, Port={}, DB={}, User={}, Password={}",
            self.host,
            self.port,
            self.dbname,
            self.user,
            if self.password.is_empty() { "[empty]" } else { "[hidden]" }
        );
        info!(
            "   Pool: max_size={}, connection_timeout={}s",
            self.pool_max_size, self.connection_timeout_secs
        );
    }

    fn pg_config(&self) -> Config {
        let mut config = Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        config.application_name("facility_locator");
        config.connect_timeout(Duration::from_secs(10));
        config
    }
}

/// Builds the connection pool and checks it with a test query.
pub async fn connect(config: &DbConfig) -> Result<PgPool> {
    info!("Connecting to PostgreSQL database...");
    let manager = PostgresConnectionManager::new(config.pg_config(), NoTls);

    let pool = Pool::builder()
        .max_size(config.pool_max_size)
        .min_idle(Some(1))
        .idle_timeout(Some(Duration::from_secs(180)))
        .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
        .build(manager)
        .await
        .context("Failed to build database connection pool")?;

    {
        let conn = pool
            .get()
            .await
            .context("Failed to get test connection from pool")?;
        conn.query_one("SELECT 1", &[])
            .await
            .context("Test query 'SELECT 1' failed")?;
    }
    info!("Database connection pool initialized successfully.");
    Ok(pool)
}

/// Returns (open connections, idle connections).
pub fn get_pool_status(pool: &PgPool) -> (u32, u32) {
    let state = pool.state();
    (state.connections, state.idle_connections)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 7] = [
        "POSTGRES_HOST",
        "POSTGRES_PORT",
        "POSTGRES_DB",
        "POSTGRES_USER",
        "POSTGRES_PASSWORD",
        "DB_POOL_MAX_SIZE",
        "DB_CONNECTION_TIMEOUT_SECS",
    ];

    // One test touches these variables so parallel tests cannot race on them.
    #[test]
    fn test_env_config() {
        for key in KEYS {
            std::env::remove_var(key);
        }
        assert_eq!(DbConfig::from_env(), DbConfig::default());

        std::env::set_var("POSTGRES_HOST", "db.internal");
        std::env::set_var("POSTGRES_PORT", "6543");
        std::env::set_var("POSTGRES_DB", "directory");
        std::env::set_var("POSTGRES_USER", "locator");
        std::env::set_var("POSTGRES_PASSWORD", "secret");
        std::env::set_var("DB_POOL_MAX_SIZE", "0");
        std::env::set_var("DB_CONNECTION_TIMEOUT_SECS", "not-a-number");

        let config = DbConfig::from_env();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.dbname, "directory");
        assert_eq!(config.user, "locator");
        assert_eq!(config.password, "secret");
        assert_eq!(config.pool_max_size, 1);
        assert_eq!(config.connection_timeout_secs, 15);

        for key in KEYS {
            std::env::remove_var(key);
        }
    }
}
