//! Application state management

use domain_visits::{RedisCounterStore, VisitService};
use observability::RequestTally;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state, built once in `main` and cloned into routers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub visits: VisitService<RedisCounterStore>,
    pub tally: Arc<RequestTally>,
}

impl AppState {
    /// `store` is `None` when bootstrap could not connect (degraded mode).
    pub fn new(config: Config, store: Option<RedisCounterStore>) -> Self {
        Self {
            config,
            visits: VisitService::new(store),
            tally: Arc::new(RequestTally::new()),
        }
    }
}
