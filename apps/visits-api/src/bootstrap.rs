//! Service bootstrap: turn the Redis configuration into a store handle, or
//! into degraded mode.

use core_config::ConfigError;
use database::redis::RedisConfig;
use domain_visits::RedisCounterStore;
use tracing::{error, info, warn};

/// Connect to Redis once at startup.
///
/// Never fails: every problem is logged and yields `None`, which the service
/// treats as degraded mode until restart.
/// - configuration missing or malformed: `warn`
/// - connect, auth or ping failure, or timeout: `error`
///
/// Calling it again is harmless; it simply builds another client.
pub async fn initialize(config: Result<RedisConfig, ConfigError>) -> Option<RedisCounterStore> {
    let config = match config {
        Ok(config) => config,
        Err(e) if e.is_missing() => {
            warn!(error = %e, "Redis not configured; running without a counter store");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Invalid Redis configuration; running without a counter store");
            return None;
        }
    };

    let url = config.redacted_url();
    match RedisCounterStore::connect(&config).await {
        Ok(store) => {
            info!(%url, read_timeout_ms = store.read_timeout().as_millis() as u64, "Counter store ready");
            Some(store)
        }
        Err(e) => {
            error!(
                %url,
                operation = "connect",
                error = %e,
                "Could not reach Redis; running without a counter store"
            );
            None
        }
    }
}
