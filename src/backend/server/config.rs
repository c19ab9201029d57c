/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * and opens the SQLite database.
 *
 * # Configuration Sources
 *
 * | Variable          | Default                  |
 * |-------------------|--------------------------|
 * | `DATABASE_URL`    | `sqlite:bookshelf.db`    |
 * | `SERVER_PORT`     | `10000` (`PORT` is also accepted) |
 * | `JWT_SECRET`      | required in release builds |
 * | `JWT_ISSUER`      | `bookshelf`              |
 * | `JWT_AUDIENCE`    | `bookshelf-clients`      |
 * | `JWT_TTL_MINUTES` | `60`                     |
 * | `FAVORITE_LIMIT`  | `5`                      |
 * | `BCRYPT_COST`     | `12`                     |
 * | `CORS_ORIGINS`    | `http://localhost:4200`  |
 * | `SEED_DATABASE`   | `false`                  |
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: a configuration or
 * connection error stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::config::{ConfigError, ServerConfig};

/// Secret used by debug builds when `JWT_SECRET` is unset
#[cfg(debug_assertions)]
const DEV_JWT_SECRET: &str = "development-only-secret-change-me-before-deploying-anywhere";

/// Connections opened for file databases
const MAX_CONNECTIONS: u32 = 5;

/// How long a writer waits for the SQLite write lock
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Load the server configuration from the environment
///
/// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the server configuration from an arbitrary variable source
pub fn load_config_from<F>(var: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = ServerConfig::builder();

    if let Some(url) = var("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(port) = var("SERVER_PORT").or_else(|| var("PORT")) {
        builder = builder.port(parse_var("SERVER_PORT", &port)?);
    }

    match var("JWT_SECRET") {
        Some(secret) => builder = builder.jwt_secret(secret),
        None => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                builder = builder.jwt_secret(DEV_JWT_SECRET);
            }
        }
    }

    if let Some(issuer) = var("JWT_ISSUER") {
        builder = builder.jwt_issuer(issuer);
    }
    if let Some(audience) = var("JWT_AUDIENCE") {
        builder = builder.jwt_audience(audience);
    }
    if let Some(ttl) = var("JWT_TTL_MINUTES") {
        builder = builder.token_ttl_minutes(parse_var("JWT_TTL_MINUTES", &ttl)?);
    }
    if let Some(limit) = var("FAVORITE_LIMIT") {
        builder = builder.favorite_limit(parse_var("FAVORITE_LIMIT", &limit)?);
    }
    if let Some(cost) = var("BCRYPT_COST") {
        builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
    }
    if let Some(origins) = var("CORS_ORIGINS") {
        let origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
        builder = builder.cors_origins(origins);
    }
    if let Some(seed) = var("SEED_DATABASE") {
        builder = builder.seed_database(parse_flag("SEED_DATABASE", &seed)?);
    }

    builder.build()
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string()))
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("'{}' is not a boolean", other))),
    }
}

/// Open the SQLite database and run migrations
///
/// In-memory URLs (`sqlite::memory:`) get a single connection that is never
/// recycled, since every SQLite connection would otherwise see its own
/// empty database.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
