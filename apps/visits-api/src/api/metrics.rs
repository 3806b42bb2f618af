//! `/metrics` (JSON request tally) and `/metrics/prometheus`

use axum::{routing::get, Router};
use observability::{prometheus_handler, tally_handler, RequestTally};
use std::sync::Arc;

pub fn router(tally: Arc<RequestTally>) -> Router {
    Router::new()
        .route("/metrics", get(tally_handler))
        .route("/metrics/prometheus", get(prometheus_handler))
        .with_state(tally)
}
