//! API routes module

pub mod metrics;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use axum_helpers::{catch_panic_layer, create_router};
use observability::observe_requests;
use tower_http::timeout::TimeoutLayer;

use crate::state::AppState;

/// Body of `GET /`.
pub const GREETING: &str = "Hello from Axum and Redis!";

/// Greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn home() -> &'static str {
    GREETING
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::document())
}

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(domain_visits::handlers::router(state.visits.clone()))
        .merge(metrics::router(state.tally.clone()))
}

/// The complete service: routes, 404 fallback and the middleware stack.
pub fn app(state: &AppState) -> Router {
    with_middleware(routes(state), state)
}

/// Layers from the inside out: security headers, panic catching, request
/// timeout, then the request observer, so the observer sees every response
/// including panics, timeouts and 404s.
fn with_middleware(routes: Router, state: &AppState) -> Router {
    create_router(routes)
        .layer(catch_panic_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.server.request_timeout,
        ))
        .layer(middleware::from_fn_with_state(
            state.tally.clone(),
            observe_requests,
        ))
}
