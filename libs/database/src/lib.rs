//! Connection plumbing for the key-value store backing the visit counter.
//!
//! # Features
//!
//! - `redis` (default) - Redis support
//! - `config` (default) - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::redis::{self, RedisConfig};
//!
//! let config = RedisConfig::host("127.0.0.1", 6379);
//! let mut conn = redis::connect(&config).await?;
//! redis::check_health(&mut conn).await?;
//! ```
//!
//! Every network call made through this crate is bounded by a timeout taken
//! from [`redis::RedisConfig`]; nothing here can hang a request handler.

pub mod common;

#[cfg(feature = "redis")]
pub mod redis;

pub use common::{DatabaseError, DatabaseResult, with_timeout};
