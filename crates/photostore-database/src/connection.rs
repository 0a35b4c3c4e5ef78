//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

use photostore_core::config::DatabaseConfig;
use photostore_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
///
/// Every store operation borrows a pooled connection instead of opening its
/// own; pool acquisition carries the configured timeout so no operation
/// blocks indefinitely on a dead database.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .ssl_mode(parse_ssl_mode(&config.ssl_mode)?)
            .database(&config.dbname)
            .username(&config.user)
            .password(&config.password);

        info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            user = %config.user,
            ssl_mode = %config.ssl_mode,
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Map a configured TLS mode string to the sqlx equivalent.
fn parse_ssl_mode(mode: &str) -> Result<PgSslMode, AppError> {
    match mode {
        "disable" => Ok(PgSslMode::Disable),
        "allow" => Ok(PgSslMode::Allow),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        "verify-ca" => Ok(PgSslMode::VerifyCa),
        "verify-full" => Ok(PgSslMode::VerifyFull),
        other => Err(AppError::configuration(format!(
            "Unknown database ssl_mode '{other}'"
        ))),
    }
}
