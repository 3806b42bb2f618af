//! Visits API - a shared visit counter in Redis behind a small HTTP surface

use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use database::redis::{install_crypto_provider, RedisConfig};
use tracing::{info, warn};

mod api;
mod bootstrap;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    install_crypto_provider();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if observability::init_metrics().is_none() {
        warn!("Prometheus export disabled; /metrics/prometheus will be empty");
    }

    // Settle the store handle before anything can route to a handler.
    let store = bootstrap::initialize(RedisConfig::from_env()).await;
    let state = AppState::new(config, store);

    if state.visits.is_degraded() {
        warn!("Starting in degraded mode: /count will answer 503 until restart");
    }

    let app = api::app(&state);

    info!(
        service = state.config.app.name,
        version = state.config.app.version,
        "Starting on {}",
        state.config.server.address()
    );

    axum_helpers::serve(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Visits API shutdown complete");
    Ok(())
}
