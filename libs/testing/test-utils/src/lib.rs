//! Helpers for tests that need a real backing service.
//!
//! With the `redis` feature, [`TestRedis`] starts a disposable Redis container
//! through testcontainers. Tests using it need Docker and are marked
//! `#[ignore = "requires Docker"]`; run them with `cargo test -- --ignored`.
//!
//! ```rust,ignore
//! let redis = TestRedis::new().await;
//! redis.set_counter("counter", 10).await;
//!
//! let store = RedisCounterStore::connect(&RedisConfig::url(redis.connection_string())).await?;
//! store.increment("counter").await?;
//!
//! assert_eq!(redis.counter("counter").await, Some(11));
//! ```

#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "redis")]
pub use redis::TestRedis;
