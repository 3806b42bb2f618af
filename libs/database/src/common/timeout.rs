use std::future::Future;
use std::time::Duration;
use tracing::warn;

use super::{DatabaseError, DatabaseResult};

/// Run a store operation with an upper bound on its duration.
///
/// The future is dropped when `limit` elapses, so a hung socket turns into
/// [`DatabaseError::Timeout`] instead of a hung request.
///
/// # Example
/// ```ignore
/// use database::common::with_timeout;
///
/// let visits: i64 = with_timeout("increment", Duration::from_secs(2), async {
///     Ok(conn.incr("counter", 1).await?)
/// })
/// .await?;
/// ```
pub async fn with_timeout<T, F>(
    operation: &'static str,
    limit: Duration,
    future: F,
) -> DatabaseResult<T>
where
    F: Future<Output = DatabaseResult<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout_ms = limit.as_millis() as u64, "Store operation timed out");
            Err(DatabaseError::Timeout {
                operation,
                after: limit,
            })
        }
    }
}
