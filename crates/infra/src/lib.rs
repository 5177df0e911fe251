//! Infrastructure layer: product storage adapters and configuration.

pub mod config;
pub mod repository;

pub use config::{AppConfig, ConfigError, LogFormat, StoreConfig};
pub use repository::{InMemoryProductRepository, PostgresProductRepository};
