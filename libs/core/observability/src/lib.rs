//! Observability utilities for the visits service.
//!
//! This crate provides:
//! - [`RequestTally`]: per-path request counts served as JSON on `/metrics`
//! - [`observe_requests`]: middleware that tallies, times and logs each request
//! - Prometheus metrics recording and export via the `metrics` facade
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, observe_requests, tally_handler, RequestTally};
//!
//! init_metrics();
//! let tally = Arc::new(RequestTally::new());
//!
//! let app = Router::new()
//!     .route("/metrics", get(tally_handler))
//!     .with_state(tally.clone())
//!     .layer(middleware::from_fn_with_state(tally, observe_requests));
//! ```

pub mod middleware;
pub mod tally;
pub mod visits;

pub use middleware::observe_requests;
pub use tally::{RequestTally, TallySnapshot, tally_handler};
pub use visits::VisitMetrics;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at startup; later calls return the same handle. Returns `None`
/// if another global recorder was installed first (metrics are then simply
/// not exported; the service keeps running).
pub fn init_metrics() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new().install_recorder()?;

            info!("Prometheus metrics recorder initialized");
            register_metric_descriptions();

            Ok::<_, metrics_exporter_prometheus::BuildError>(handle)
        })
        .inspect_err(|e| warn!(error = %e, "Prometheus recorder not installed"))
        .ok()
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for the Prometheus text exposition
pub async fn prometheus_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    describe_counter!("visits_recorded_total", "Successful counter increments");
    describe_counter!(
        "store_operation_failures_total",
        "Failed counter store operations by operation and reason"
    );
    describe_counter!("health_checks_total", "Health probes by reported status");
}
