//! Counter-store metrics for the visits domain.

use metrics::counter;

/// Visit and store metrics recorder
pub struct VisitMetrics;

impl VisitMetrics {
    /// Record a successful increment
    pub fn record_visit(visits: i64) {
        counter!("visits_recorded_total").increment(1);

        tracing::debug!(visits, "Recorded visit");
    }

    /// Record a failed store operation.
    ///
    /// `reason` is a small fixed vocabulary (`not_initialized`, `unreachable`,
    /// `error`) to keep label cardinality bounded.
    pub fn record_store_failure(operation: &'static str, reason: &'static str) {
        counter!(
            "store_operation_failures_total",
            "operation" => operation,
            "reason" => reason
        )
        .increment(1);
    }

    /// Record the outcome of a health probe
    pub fn record_health(status: &'static str) {
        counter!("health_checks_total", "status" => status).increment(1);
    }
}
