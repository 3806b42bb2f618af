//! Visit Service - degraded-mode policy around the counter store

use observability::VisitMetrics;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::error::{VisitError, VisitResult};
use crate::models::HealthReport;
use crate::store::{COUNTER_KEY, CounterStore};

/// Visit service
///
/// Holds the store handle, or its absence when the service started without
/// one. The handle is fixed at construction; handlers only read it.
pub struct VisitService<S: CounterStore> {
    store: Option<Arc<S>>,
}

impl<S: CounterStore> VisitService<S> {
    /// `None` puts the service in degraded mode until restart.
    pub fn new(store: Option<S>) -> Self {
        Self {
            store: store.map(Arc::new),
        }
    }

    pub fn connected(store: S) -> Self {
        Self::new(Some(store))
    }

    pub fn degraded() -> Self {
        Self { store: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.store.is_none()
    }

    /// Count one visit and return the new counter value.
    #[instrument(skip(self))]
    pub async fn record_visit(&self) -> VisitResult<i64> {
        let Some(store) = &self.store else {
            error!(
                operation = "increment",
                cause = "never connected",
                "Visit not counted: Redis was never connected"
            );
            VisitMetrics::record_store_failure("increment", "not_initialized");
            return Err(VisitError::NotInitialized);
        };

        match store.increment(COUNTER_KEY).await {
            Ok(visits) => {
                info!(visits, "Visit counted");
                VisitMetrics::record_visit(visits);
                Ok(visits)
            }
            Err(e) => {
                error!(
                    operation = "increment",
                    cause = "operation failed",
                    error = %e,
                    "Visit not counted: Redis operation failed"
                );
                let reason = if e.is_unreachable() { "unreachable" } else { "error" };
                VisitMetrics::record_store_failure("increment", reason);
                Err(VisitError::Store(e))
            }
        }
    }

    /// Probe the store. Never fails; the outcome is in the report.
    #[instrument(skip(self))]
    pub async fn health(&self) -> HealthReport {
        let report = match &self.store {
            None => HealthReport::not_connected(),
            Some(store) => match store.ping().await {
                Ok(()) => HealthReport::ok(),
                Err(e) if e.is_unreachable() => {
                    warn!(operation = "ping", error = %e, "Redis unreachable");
                    VisitMetrics::record_store_failure("ping", "unreachable");
                    HealthReport::unreachable()
                }
                Err(e) => {
                    error!(operation = "ping", error = %e, "Redis health check failed");
                    VisitMetrics::record_store_failure("ping", "error");
                    HealthReport::disconnected()
                }
            },
        };

        VisitMetrics::record_health(report.status.as_str());
        report
    }
}

impl<S: CounterStore> Clone for VisitService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
