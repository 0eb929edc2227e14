/**
 * Server Configuration
 *
 * Loading of the server configuration and the database connection.
 *
 * # Configuration Sources
 *
 * In increasing priority:
 * 1. Built-in defaults
 * 2. A TOML file: `$DIRECTMSG_CONFIG`, or `directmsg.toml` if present
 * 3. Environment variables (`.env` is loaded by the binary via `dotenv`)
 *
 * | Variable                | Field                            |
 * |-------------------------|----------------------------------|
 * | `DATABASE_URL`          | `database_url`                   |
 * | `SERVER_PORT`           | `server_port`                    |
 * | `JWT_SECRET`            | `jwt_secret`                     |
 * | `REALTIME_CAPACITY`     | `realtime_capacity`              |
 * | `HISTORY_DEFAULT_LIMIT` | `messaging.history_default_limit`|
 * | `HISTORY_MAX_LIMIT`     | `messaging.history_max_limit`    |
 * | `MAX_BODY_LEN`          | `messaging.max_body_len`         |
 * | `APPEND_RETRIES`        | `messaging.append_retries`       |
 */

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::config::{ConfigError, MessagingConfig};

/// Config file read when `DIRECTMSG_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "directmsg.toml";

const DEFAULT_DATABASE_URL: &str = "sqlite://directmsg.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REALTIME_CAPACITY: usize = 1000;
const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub database_url: String,
    pub server_port: u16,
    /// HS256 secret shared with the identity service
    pub jwt_secret: String,
    /// Buffer size of the realtime broadcast channel
    pub realtime_capacity: usize,
    pub messaging: MessagingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_port: DEFAULT_PORT,
            jwt_secret: String::new(),
            realtime_capacity: DEFAULT_REALTIME_CAPACITY,
            messaging: MessagingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from the config file (if any) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("DIRECTMSG_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Override fields from variables returned by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(port) = parse_var(&lookup, "SERVER_PORT", "server_port")? {
            self.server_port = port;
        }
        if let Some(capacity) = parse_var(&lookup, "REALTIME_CAPACITY", "realtime_capacity")? {
            self.realtime_capacity = capacity;
        }
        if let Some(limit) = parse_var(&lookup, "HISTORY_DEFAULT_LIMIT", "history_default_limit")? {
            self.messaging.history_default_limit = limit;
        }
        if let Some(limit) = parse_var(&lookup, "HISTORY_MAX_LIMIT", "history_max_limit")? {
            self.messaging.history_max_limit = limit;
        }
        if let Some(len) = parse_var(&lookup, "MAX_BODY_LEN", "max_body_len")? {
            self.messaging.max_body_len = len;
        }
        if let Some(retries) = parse_var(&lookup, "APPEND_RETRIES", "append_retries")? {
            self.messaging.append_retries = retries;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.realtime_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "realtime_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        self.messaging.validate()
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, field: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidValue {
            field,
            reason: format!("{}='{}': {}", key, raw, e),
        }),
    }
}

/// Open a connection pool for `database_url` and run the migrations
pub async fn open_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}

/// Load the database configured in `config`
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = open_database(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to open database: {:?}", e);
        e
    })?;

    tracing::info!("Database ready, migrations applied");
    Ok(pool)
}
