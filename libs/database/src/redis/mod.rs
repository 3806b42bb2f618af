//! Redis connector and utilities
//!
//! Provides configuration, bounded connection setup and liveness checks.

mod config;
mod connector;
mod health;
mod tls;

pub use config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_PORT, DEFAULT_READ_TIMEOUT, RedisConfig, RedisTarget,
};
pub use connector::connect;
pub use health::check_health;
pub use tls::install_crypto_provider;

// Re-export redis types for convenience
pub use redis::aio::ConnectionManager;
pub use redis::{Client, RedisError, cmd};
