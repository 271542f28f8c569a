//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use pms_core::PhoneValidation;

/// Webhook server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// JSON fixtures served by the mock PMS API.
    pub fixtures_path: Option<PathBuf>,
    /// Phone number checking applied during reconciliation.
    pub phone_validation: PhoneValidation,
    /// Whether the nightly sync task runs.
    pub nightly_sync: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SERVER_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:pms.db?mode=rwc` |
    /// | `PMS_FIXTURES_PATH` | Mock PMS fixture file | (none, empty mock) |
    /// | `STRICT_PHONE_VALIDATION` | Reject invalid phone numbers | `true` |
    /// | `NIGHTLY_SYNC` | Run the midnight sync task | `true` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:pms.db?mode=rwc".to_string());

        let fixtures_path = env::var("PMS_FIXTURES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let phone_validation = if bool_var("STRICT_PHONE_VALIDATION", true)? {
            PhoneValidation::Strict
        } else {
            PhoneValidation::PresenceOnly
        };

        let nightly_sync = bool_var("NIGHTLY_SYNC", true)?;

        Ok(Self {
            addr,
            database_url,
            fixtures_path,
            phone_validation,
            nightly_sync,
        })
    }
}

fn bool_var(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool(name)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SERVER_ADDR format")]
    InvalidAddr,

    #[error("{0} must be true or false")]
    InvalidBool(&'static str),
}
