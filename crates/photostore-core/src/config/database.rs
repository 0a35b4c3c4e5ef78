//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection and pool configuration.
///
/// Connection parameters are discrete fields rather than a single URL so
/// each one can be overridden independently from the environment
/// (`PHOTOSTORE__DATABASE__HOST`, `PHOTOSTORE__DATABASE__PASSWORD`, ...).
/// The defaults match the reference deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database server host.
    #[serde(default = "default_db_host")]
    pub host: String,
    /// Database server port.
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// TLS mode: `disable`, `allow`, `prefer`, `require`, `verify-ca`,
    /// or `verify-full`.
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,
    /// Database name.
    #[serde(default = "default_dbname")]
    pub dbname: String,
    /// Schema holding the photos table.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Database user.
    #[serde(default = "default_user")]
    pub user: String,
    /// Database password.
    #[serde(default = "default_password")]
    pub password: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            ssl_mode: default_ssl_mode(),
            dbname: default_dbname(),
            schema: default_schema(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_ssl_mode() -> String {
    "prefer".to_string()
}

fn default_dbname() -> String {
    "digital-rutebok".to_string()
}

fn default_schema() -> String {
    "rutebok".to_string()
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_password() -> String {
    "example".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
