use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use super::{RedisConfig, check_health, install_crypto_provider};
use crate::common::{DatabaseError, DatabaseResult, with_timeout};

/// Connect to Redis and return a ConnectionManager
///
/// The ConnectionManager reconnects on its own after transient failures, so a
/// handle obtained here stays usable if Redis restarts.
///
/// Opening the client, establishing the connection and the verifying `PING`
/// all share one budget: `config.connect_timeout`. An unreachable server
/// therefore fails in bounded time instead of hanging startup.
///
/// # Example
/// ```ignore
/// use database::redis::{RedisConfig, connect};
/// use database::redis::cmd;
///
/// let mut conn = connect(&RedisConfig::url("redis://127.0.0.1:6379")).await?;
/// let visits: i64 = cmd("INCR").arg("counter").query_async(&mut conn).await?;
/// ```
pub async fn connect(config: &RedisConfig) -> DatabaseResult<ConnectionManager> {
    let url = config.redacted_url();
    info!(%url, tls = config.is_tls(), "Attempting to connect to Redis");

    if config.is_tls() {
        install_crypto_provider();
    }

    let client = Client::open(config.connection_url())?;

    let result = with_timeout("connect", config.connect_timeout, async {
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        check_health(&mut conn).await?;

        Ok::<_, DatabaseError>(manager)
    })
    .await;

    if result.is_ok() {
        info!(%url, "Successfully connected to Redis");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = RedisConfig::url("definitely not a url");
        match connect(&config).await {
            Err(err) => assert!(matches!(err, DatabaseError::Redis(_))),
            Ok(_) => panic!("malformed URL must not connect"),
        }
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_fails_fast() {
        // Port 1 on loopback is never a Redis server.
        let config = RedisConfig::host("127.0.0.1", 1)
            .with_timeouts(Duration::from_millis(300), Duration::from_millis(300));

        let started = Instant::now();
        let result = connect(&config).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_tls_connect_to_closed_port_is_an_error() {
        let config = RedisConfig::host("127.0.0.1", 1)
            .with_tls(true)
            .with_timeouts(Duration::from_millis(300), Duration::from_millis(300));

        assert!(connect(&config).await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_connect_to_container() {
        let redis = test_utils::TestRedis::new().await;
        let config = RedisConfig::url(redis.connection_string());

        let mut manager = connect(&config).await.unwrap();
        check_health(&mut manager).await.unwrap();
    }
}
