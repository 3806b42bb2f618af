use std::time::Duration;

/// Unified error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Redis-specific errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Operation did not finish inside its time budget
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl DatabaseError {
    pub fn is_timeout(&self) -> bool {
        match self {
            DatabaseError::Timeout { .. } => true,
            #[cfg(feature = "redis")]
            DatabaseError::Redis(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// True when the server could not be reached at all (timeout or refused
    /// connection), as opposed to a reachable server answering with an error.
    pub fn is_unreachable(&self) -> bool {
        match self {
            DatabaseError::Timeout { .. } => true,
            #[cfg(feature = "redis")]
            DatabaseError::Redis(e) => e.is_timeout() || e.is_connection_refusal(),
            _ => false,
        }
    }
}

/// Result type alias for store operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
