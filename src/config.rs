//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://products.db"
//! export JWT_SECRET="change-me"
//! export JWT_EXPIRES_IN=300
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DB_NAME` (default
//! `products.db`). `DB_DRIVER` may be set but only `sqlite` is supported.
//!
//! ## Required Variables
//!
//! - `JWT_SECRET` - HS256 signing secret
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `WEB_SERVER_PORT` - Port used when `LISTEN` is unset
//! - `JWT_EXPIRES_IN` - Token lifetime in seconds (default: 300, at most ten years)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Longest accepted token lifetime: ten years in seconds.
pub const MAX_JWT_EXPIRES_IN: i64 = 10 * 365 * 24 * 60 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_driver: String,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HS256 secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds.
    pub jwt_expires_in: i64,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let db_driver = env::var("DB_DRIVER").unwrap_or_else(|_| "sqlite".to_string());
        let database_url = Self::load_database_url();
        let listen_addr = Self::load_listen_addr();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let jwt_expires_in = env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            db_driver,
            database_url,
            listen_addr,
            log_level,
            log_format,
            jwt_secret,
            jwt_expires_in,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Priority:
    /// 1. `DATABASE_URL`
    /// 2. `sqlite://{DB_NAME}` with `DB_NAME` defaulting to `products.db`
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let name = env::var("DB_NAME").unwrap_or_else(|_| "products.db".to_string());
        format!("sqlite://{}", name)
    }

    /// Priority:
    /// 1. `LISTEN`
    /// 2. `0.0.0.0:{WEB_SERVER_PORT}`
    /// 3. `0.0.0.0:8000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        let port = env::var("WEB_SERVER_PORT").unwrap_or_else(|_| "8000".to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.db_driver.eq_ignore_ascii_case("sqlite") {
            anyhow::bail!("DB_DRIVER must be 'sqlite', got '{}'", self.db_driver);
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.jwt_secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        if self.jwt_expires_in <= 0 || self.jwt_expires_in > MAX_JWT_EXPIRES_IN {
            anyhow::bail!(
                "JWT_EXPIRES_IN must be between 1 and {}, got {}",
                MAX_JWT_EXPIRES_IN,
                self.jwt_expires_in
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Pool acquire timeout as a [`Duration`].
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {} ({})", self.database_url, self.db_driver);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Token TTL: {}s", self.jwt_expires_in);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be loaded already (`dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
