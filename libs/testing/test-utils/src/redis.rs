//! Throwaway Redis server for integration tests.

use redis::aio::MultiplexedConnection;
use redis::Client;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// A Redis 8 container plus a connection for inspecting it.
///
/// The container is removed when this value is dropped, so every test that
/// creates one starts from an empty keyspace.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    connection: MultiplexedConnection,
    url: String,
}

impl TestRedis {
    /// Start `redis:8-alpine` and wait until it accepts connections.
    pub async fn new() -> Self {
        let container = Redis::default()
            .with_tag("8-alpine")
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");
        let url = format!("redis://127.0.0.1:{}", port);

        let connection = Client::open(url.as_str())
            .expect("Failed to create Redis client")
            .get_multiplexed_async_connection()
            .await
            .expect("Failed to connect to Redis");

        tracing::info!(port, "Test Redis ready");

        Self {
            _container: container,
            connection,
            url,
        }
    }

    /// Connection for reading or seeding keys behind the code under test.
    pub fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }

    /// `redis://` URL of the container, for the code under test.
    pub fn connection_string(&self) -> &str {
        &self.url
    }

    /// Current value of an integer key, `None` if the key does not exist.
    pub async fn counter(&self, key: &str) -> Option<i64> {
        redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection())
            .await
            .expect("GET failed")
    }

    /// Seed an integer key, e.g. to start a counter somewhere other than 0.
    pub async fn set_counter(&self, key: &str, value: i64) {
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut self.connection())
            .await
            .expect("SET failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_seeded_counter_is_readable() {
        let redis = TestRedis::new().await;
        assert_eq!(redis.counter("counter").await, None);

        redis.set_counter("counter", 41).await;

        assert_eq!(redis.counter("counter").await, Some(41));
    }
}
