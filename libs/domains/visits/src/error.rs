use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

/// Body message when no store connection was ever established.
pub const NOT_INITIALIZED_MESSAGE: &str = "Redis not initialized";

/// Body message when a store call fails. The cause is logged, not returned.
pub const STORE_ERROR_MESSAGE: &str = "Redis error";

#[derive(Debug, Error)]
pub enum VisitError {
    /// The service runs without a store (degraded mode).
    #[error("Redis not initialized")]
    NotInitialized,

    /// The store was connected but the operation failed or timed out.
    #[error("Redis operation failed: {0}")]
    Store(#[from] DatabaseError),
}

pub type VisitResult<T> = Result<T, VisitError>;

/// Convert VisitError to AppError for standardized error responses
impl From<VisitError> for AppError {
    fn from(err: VisitError) -> Self {
        match err {
            VisitError::NotInitialized => {
                AppError::StoreUnavailable(NOT_INITIALIZED_MESSAGE.to_string())
            }
            VisitError::Store(_) => AppError::StoreFailure(STORE_ERROR_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for VisitError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
