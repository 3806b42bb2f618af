use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::VisitResult;
use crate::models::{HealthReport, HealthStatus, RedisStatus, VisitsResponse};
use crate::service::VisitService;
use crate::store::CounterStore;

/// OpenAPI documentation for the Visits API
#[derive(OpenApi)]
#[openapi(
    paths(count, health),
    components(schemas(VisitsResponse, HealthReport, HealthStatus, RedisStatus, ErrorResponse)),
    tags(
        (name = "Visits", description = "Shared visit counter and service health")
    )
)]
pub struct ApiDoc;

/// Create the visits router (`/count`, `/health`)
pub fn router<S: CounterStore + 'static>(service: VisitService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/count", get(count::<S>))
        .route("/health", get(health::<S>))
        .with_state(shared_service)
}

/// Count a visit
#[utoipa::path(
    get,
    path = "/count",
    tag = "Visits",
    responses(
        (status = 200, description = "Visit counted", body = VisitsResponse),
        (status = 500, description = "Redis call failed or timed out", body = ErrorResponse),
        (status = 503, description = "Service started without Redis", body = ErrorResponse)
    )
)]
async fn count<S: CounterStore>(
    State(service): State<Arc<VisitService<S>>>,
) -> VisitResult<Json<VisitsResponse>> {
    let visits = service.record_visit().await?;
    Ok(Json(VisitsResponse { visits }))
}

/// Service health
///
/// Always answers 200; the body tells whether the counter store is usable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Visits",
    responses(
        (status = 200, description = "Service is up; store status in body", body = HealthReport)
    )
)]
async fn health<S: CounterStore>(State(service): State<Arc<VisitService<S>>>) -> Json<HealthReport> {
    Json(service.health().await)
}
