//! Application configuration module
//!
//! Provides the configuration types for the server. Values are assembled
//! through [`ServerConfigBuilder`], which fills in defaults and validates the
//! result; environment loading lives in `backend::server::config`.

use thiserror::Error;

/// Default SQLite database URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite:bookshelf.db";

/// Default listening port
pub const DEFAULT_PORT: u16 = 10000;

/// Default token issuer and audience
pub const DEFAULT_ISSUER: &str = "bookshelf";
pub const DEFAULT_AUDIENCE: &str = "bookshelf-clients";

/// Tokens expire this many minutes after issuance
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// Maximum number of favorite quotes per user
pub const DEFAULT_FAVORITE_LIMIT: usize = 5;

/// bcrypt work factor, same as `bcrypt::DEFAULT_COST`
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Shortest accepted signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Origin allowed by CORS when none are configured
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

/// Token signing and validation settings
#[derive(Debug, Clone)]
pub struct TokenSettings {
    /// HMAC secret used to sign and verify tokens
    pub secret: String,
    /// Value of the `iss` claim
    pub issuer: String,
    /// Value of the `aud` claim
    pub audience: String,
    /// Token lifetime in minutes
    pub ttl_minutes: i64,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection URL (`sqlite:...`)
    pub database_url: String,
    /// Listening port
    pub port: u16,
    /// Token settings
    pub token: TokenSettings,
    /// Maximum number of favorite quotes per user
    pub favorite_limit: usize,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
    /// Insert demo data into empty tables at startup
    pub seed_database: bool,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret {
                min_len: MIN_SECRET_LEN,
            });
        }
        if self.token.ttl_minutes <= 0 {
            return Err(ConfigError::invalid("JWT_TTL_MINUTES", "must be positive"));
        }
        if self.favorite_limit == 0 {
            return Err(ConfigError::invalid("FAVORITE_LIMIT", "must be at least 1"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid("BCRYPT_COST", "must be between 4 and 31"));
        }
        if !self.database_url.starts_with("sqlite:") {
            return Err(ConfigError::invalid("DATABASE_URL", "only sqlite: URLs are supported"));
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    port: Option<u16>,
    jwt_secret: Option<String>,
    jwt_issuer: Option<String>,
    jwt_audience: Option<String>,
    token_ttl_minutes: Option<i64>,
    favorite_limit: Option<usize>,
    bcrypt_cost: Option<u32>,
    cors_origins: Option<Vec<String>>,
    seed_database: bool,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token issuer
    pub fn jwt_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt_issuer = Some(issuer.into());
        self
    }

    /// Set the token audience
    pub fn jwt_audience(mut self, audience: impl Into<String>) -> Self {
        self.jwt_audience = Some(audience.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = Some(minutes);
        self
    }

    /// Set the favorite quote limit
    pub fn favorite_limit(mut self, limit: usize) -> Self {
        self.favorite_limit = Some(limit);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the CORS origins
    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable startup seeding
    pub fn seed_database(mut self, seed: bool) -> Self {
        self.seed_database = seed;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let secret = self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let cors_origins = match self.cors_origins {
            Some(origins) if !origins.is_empty() => origins,
            _ => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };

        let config = ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            token: TokenSettings {
                secret,
                issuer: self.jwt_issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
                audience: self
                    .jwt_audience
                    .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
                ttl_minutes: self.token_ttl_minutes.unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            },
            favorite_limit: self.favorite_limit.unwrap_or(DEFAULT_FAVORITE_LIMIT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            cors_origins,
            seed_database: self.seed_database,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("JWT_SECRET must be at least {min_len} bytes")]
    WeakSecret { min_len: usize },
}

impl ConfigError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}
