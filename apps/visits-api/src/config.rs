//! Configuration for Visits API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
///
/// Redis settings are resolved separately by [`crate::bootstrap`]: a missing
/// or malformed Redis configuration degrades the service instead of stopping
/// it, while a malformed server configuration is fatal.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
