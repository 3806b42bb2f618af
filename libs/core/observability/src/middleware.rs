//! Axum middleware that tallies, times and logs every request.

use axum::{
    extract::{ConnectInfo, MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::tally::RequestTally;

/// Middleware function wrapping every request.
///
/// Before the handler: stamps the start time and counts the request's path in
/// the [`RequestTally`]. After the handler: emits exactly one log event with
/// `method`, `path`, `status`, `duration_ms` and `client_addr`, and records
/// `http_requests_total`, `http_request_duration_seconds` and
/// `http_requests_errors_total`.
///
/// The post-handler half runs for every response the inner service produces.
/// Layer `tower_http::catch_panic` *inside* this middleware so a panicking
/// handler also comes back as a (500) response rather than unwinding past it.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use observability::{RequestTally, observe_requests};
///
/// let tally = Arc::new(RequestTally::new());
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(tally, observe_requests));
/// ```
pub async fn observe_requests(
    State(tally): State<Arc<RequestTally>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tally.record(&path);

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let duration_ms = duration.as_secs_f64() * 1000.0;

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), duration_ms, %client_addr, "request completed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), duration_ms, %client_addr, "request completed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), duration_ms, %client_addr, "request completed");
    }

    record_http_metrics(method.as_str(), route, status, duration.as_secs_f64());

    response
}

fn record_http_metrics(method: &str, route: String, status: StatusCode, seconds: f64) {
    let status_code = status.as_u16().to_string();
    let status_class = match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };

    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => route.clone(),
        "status" => status_code.clone(),
        "status_class" => status_class
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => route.clone()
    )
    .record(seconds);

    if status.is_client_error() || status.is_server_error() {
        counter!(
            "http_requests_errors_total",
            "method" => method.to_string(),
            "path" => route,
            "status" => status_code
        )
        .increment(1);
    }
}
