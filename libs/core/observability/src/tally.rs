//! In-memory per-path request counter.
//!
//! Every inbound request bumps the entry for its URI path. Entries are created
//! lazily and live until the process exits; nothing is persisted.
//!
//! Keys are raw paths, unrouted ones included, so the map has one entry per
//! distinct path ever requested. A 404 scan grows it for the life of the
//! process. Prometheus export labels by matched route instead and stays
//! bounded.

use axum::{Json, extract::State};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use utoipa::ToSchema;

/// Concurrency-safe request counter keyed by path.
///
/// The map is sharded (`DashMap`) and each value is an atomic, so concurrent
/// requests to the same path never lose an increment.
#[derive(Debug, Default)]
pub struct RequestTally {
    by_path: DashMap<String, AtomicU64>,
}

/// Point-in-time view of a [`RequestTally`], as served by `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TallySnapshot {
    /// Sum of every entry in `requests_by_path`
    pub requests_total: u64,
    /// Requests seen per path since process start
    pub requests_by_path: BTreeMap<String, u64>,
}

impl RequestTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request for `path`.
    pub fn record(&self, path: &str) {
        // Fast path: existing entry, shared shard lock only.
        if let Some(counter) = self.by_path.get(path) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.by_path
            .entry(path.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for one path.
    pub fn count(&self, path: &str) -> u64 {
        self.by_path
            .get(path)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Copy the current counts. `requests_total` is summed from the copied
    /// values, so it always equals the sum of `requests_by_path`.
    pub fn snapshot(&self) -> TallySnapshot {
        let requests_by_path: BTreeMap<String, u64> = self
            .by_path
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().load(Ordering::Relaxed)))
            .collect();

        TallySnapshot {
            requests_total: requests_by_path.values().sum(),
            requests_by_path,
        }
    }

    pub fn total(&self) -> u64 {
        self.snapshot().requests_total
    }
}

/// Axum handler serving the tally as JSON.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "observability",
    responses(
        (status = 200, description = "Request counts since process start", body = TallySnapshot)
    )
)]
pub async fn tally_handler(State(tally): State<Arc<RequestTally>>) -> Json<TallySnapshot> {
    Json(tally.snapshot())
}
