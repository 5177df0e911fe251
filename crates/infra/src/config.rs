//! Configuration loading and representation.
//!
//! Everything is read from environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BIND_ADDR` | `0.0.0.0:8080` | HTTP listen address |
//! | `USE_PERSISTENT_STORES` | `false` | Use Postgres instead of the in-memory store |
//! | `DATABASE_URL` | (none) | Required when persistent stores are enabled |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Pool size for Postgres |
//! | `LOG_FORMAT` | `json` | `json` or `pretty` |

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub use catalog_observability::LogFormat;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("{0} must be set when USE_PERSISTENT_STORES=true")]
    Missing(&'static str),
}

/// Which product store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// In-memory store, ephemeral port. Used by tests and local tooling.
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            store: StoreConfig::InMemory,
            log_format: LogFormat::Pretty,
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), || {
            DEFAULT_BIND_ADDR.parse().map_err(|e| format!("{e}"))
        })?;

        let use_persistent: bool = parse_or("USE_PERSISTENT_STORES", lookup("USE_PERSISTENT_STORES"), || Ok(false))?;

        let store = if use_persistent {
            let database_url = lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing("DATABASE_URL"))?;
            let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"), || {
                Ok(DEFAULT_MAX_CONNECTIONS)
            })?;
            StoreConfig::Postgres {
                database_url,
                max_connections,
            }
        } else {
            StoreConfig::InMemory
        };

        let log_format = parse_or("LOG_FORMAT", lookup("LOG_FORMAT"), || Ok(LogFormat::default()))?;

        Ok(Self {
            bind_addr,
            store,
            log_format,
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    D: FnOnce() -> Result<T, String>,
{
    let parsed = match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| e.to_string()),
        None => default(),
    };
    parsed.map_err(|message| ConfigError::Invalid { key, message })
}
