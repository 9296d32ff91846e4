//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `DB_URL` - PostgreSQL connection string (`DATABASE_URL` is accepted as a fallback)
//!
//! ## Optional Variables
//!
//! - `PLATFORM` - Operating mode; only `dev` enables `POST /admin/reset`
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `STATIC_DIR` - Directory served under `/app` (default: `.`)
//! - `ASSETS_DIR` - Directory served under `/assets` (default: `./assets`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)

use anyhow::{Context, Result};
use std::env;

use crate::domain::operating_mode::OperatingMode;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub mode: OperatingMode,
    pub listen_addr: String,
    pub static_dir: String,
    pub assets_dir: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds.
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no database URL is configured.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let mode = OperatingMode::from_platform(env::var("PLATFORM").ok().as_deref());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| ".".to_string());
        let assets_dir = env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            mode,
            listen_addr,
            static_dir,
            assets_dir,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DB_URL`
    /// 2. `DATABASE_URL`
    fn load_database_url() -> Result<String> {
        env::var("DB_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .context("DB_URL must be set")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a PostgreSQL URL
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
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

        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            anyhow::bail!(
                "DB_URL must start with 'postgres://' or 'postgresql://', got '{}'",
                mask_connection_string(&self.database_url)
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

    /// Logs configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", mask_connection_string(&self.database_url));
        tracing::info!("  Platform: {}", self.mode.as_str());
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Assets dir: {}", self.assets_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Hides the password of a connection URL before it is logged.
///
/// Only the part between the first `:` of the userinfo and the last `@` is
/// replaced, so passwords containing `:` or `@` are hidden completely. URLs
/// without a password are returned as is.
fn mask_connection_string(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((user, _password)) = userinfo.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{user}:***@{host}")
}
