//! Counter Store Client.
//!
//! [`CounterStore`] is the seam between the service and the key-value store:
//! a liveness check and an atomic increment, nothing else.

use async_trait::async_trait;
use database::redis::{self, ConnectionManager, RedisConfig};
use database::{DatabaseError, DatabaseResult, with_timeout};
use std::time::Duration;
use tracing::debug;

/// Key of the single shared visit counter.
pub const COUNTER_KEY: &str = "counter";

pub type StoreResult<T> = DatabaseResult<T>;

/// Atomic counter storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Liveness check. Must not modify any stored value.
    async fn ping(&self) -> StoreResult<()>;

    /// Atomically add 1 to the integer at `key` and return the new value.
    ///
    /// A missing key counts as 0, so the first call returns 1.
    async fn increment(&self, key: &str) -> StoreResult<i64>;
}

/// [`CounterStore`] backed by Redis.
///
/// Cloning is cheap; clones share one multiplexed connection. Every call is
/// bounded by the read timeout from [`RedisConfig`].
#[derive(Clone)]
pub struct RedisCounterStore {
    manager: ConnectionManager,
    read_timeout: Duration,
}

impl RedisCounterStore {
    pub fn new(manager: ConnectionManager, read_timeout: Duration) -> Self {
        Self {
            manager,
            read_timeout,
        }
    }

    /// Connect and verify with `PING`, all within `config.connect_timeout`.
    pub async fn connect(config: &RedisConfig) -> StoreResult<Self> {
        let manager = redis::connect(config).await?;
        Ok(Self::new(manager, config.read_timeout))
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.manager.clone();
        with_timeout("ping", self.read_timeout, async move {
            redis::check_health(&mut conn).await
        })
        .await
    }

    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.manager.clone();
        let value = with_timeout("increment", self.read_timeout, async move {
            // Single INCR: the server serializes concurrent increments.
            let value: i64 = redis::cmd("INCR").arg(key).query_async(&mut conn).await?;
            Ok::<_, DatabaseError>(value)
        })
        .await?;

        debug!(key, value, "Counter incremented");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::TestRedis;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_increment_against_real_redis() {
        let redis = TestRedis::new().await;
        let store = RedisCounterStore::connect(&RedisConfig::url(redis.connection_string()))
            .await
            .unwrap();

        store.ping().await.unwrap();
        assert_eq!(store.increment(COUNTER_KEY).await.unwrap(), 1);
        assert_eq!(store.increment(COUNTER_KEY).await.unwrap(), 2);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_ping_does_not_touch_the_counter() {
        let redis = TestRedis::new().await;
        let store = RedisCounterStore::connect(&RedisConfig::url(redis.connection_string()))
            .await
            .unwrap();

        store.increment(COUNTER_KEY).await.unwrap();
        store.ping().await.unwrap();
        store.ping().await.unwrap();

        assert_eq!(redis.counter(COUNTER_KEY).await, Some(1));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_increment_continues_from_existing_value() {
        let redis = TestRedis::new().await;
        redis.set_counter(COUNTER_KEY, 100).await;
        let store = RedisCounterStore::connect(&RedisConfig::url(redis.connection_string()))
            .await
            .unwrap();

        for _ in 0..5 {
            store.increment(COUNTER_KEY).await.unwrap();
        }

        assert_eq!(redis.counter(COUNTER_KEY).await, Some(105));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_concurrent_increments_are_contiguous() {
        let redis = TestRedis::new().await;
        let store = RedisCounterStore::connect(&RedisConfig::url(redis.connection_string()))
            .await
            .unwrap();

        let calls = (0..50).map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.increment(COUNTER_KEY).await.unwrap() })
        });
        let mut values: Vec<i64> = futures::future::try_join_all(calls).await.unwrap();
        values.sort_unstable();

        assert_eq!(values, (1..=50).collect::<Vec<_>>());
    }
}
