use redis::aio::ConnectionLike;
use std::time::Instant;
use tracing::debug;

use crate::common::DatabaseError;

/// Liveness check: `PING`, expecting `PONG`.
///
/// Reads nothing and writes nothing, so it is safe to call from a health
/// endpoint as often as probes like.
///
/// Failures keep their cause: a transport problem comes back as
/// [`DatabaseError::Redis`] (so [`DatabaseError::is_unreachable`] can tell a
/// refused connection apart), an unexpected reply as
/// [`DatabaseError::HealthCheckFailed`].
///
/// Not bounded here; wrap it in [`with_timeout`](crate::with_timeout).
pub async fn check_health<C>(conn: &mut C) -> Result<(), DatabaseError>
where
    C: ConnectionLike + Send,
{
    let started = Instant::now();
    let reply: String = redis::cmd("PING").query_async(conn).await?;

    if reply != "PONG" {
        return Err(DatabaseError::HealthCheckFailed(format!(
            "Redis PING returned unexpected response: {}",
            reply
        )));
    }

    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Redis PING ok");
    Ok(())
}
