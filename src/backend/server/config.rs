/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * `ServerConfig::from_env` reads environment variables (after `.env` has
 * been loaded by the binary). Tests and embedders use
 * `ServerConfig::builder()` instead, so nothing in the request path reads
 * the environment.
 *
 * | Variable       | Default                             |
 * |----------------|-------------------------------------|
 * | `DATABASE_URL` | `sqlite://restaurants.db?mode=rwc`  |
 * | `JWT_SECRET`   | required                            |
 * | `SERVER_PORT`  | `3000`                              |
 * | `BCRYPT_COST`  | `10`                                |
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default SQLite database file, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://restaurants.db?mode=rwc";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Work factors bcrypt accepts
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Server configuration
///
/// Constructed once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection URL for the SQLite database
    pub database_url: String,
    /// HMAC secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingValue` - `JWT_SECRET` is unset or empty
    /// * `ConfigError::InvalidValue` - a numeric variable does not parse or
    ///   is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port,
            })?;
            builder = builder.port(port);
        }
        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            let cost = cost.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: cost,
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: String,
    jwt_secret: Option<String>,
    port: u16,
    bcrypt_cost: u32,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port,
            bcrypt_cost: self.bcrypt_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Open the database pool and run migrations
///
/// # Errors
///
/// Returns the sqlx error if the database cannot be opened or a migration
/// fails. Unlike optional services, the database is required: the server
/// has nothing to serve without it.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with migrations applied
///
/// The pool holds a single connection that never expires, since every new
/// SQLite `:memory:` connection would otherwise see an empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = "sqlite::memory:".parse::<SqliteConnectOptions>()?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run the embedded migrations from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
