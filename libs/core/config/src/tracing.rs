use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
///
/// Development keeps the service crates at `debug` but holds the HTTP and
/// Redis client crates at `info`, otherwise every PING shows up twice.
pub fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "info",
        Environment::Development => "debug,hyper=info,h2=info,redis=info",
    }
}

/// Install color-eyre for `main`. Later calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Set up the global subscriber.
///
/// Production writes one flattened JSON object per event, without targets.
/// Development writes pretty multi-line output. Both capture spans for
/// `eyre` reports through [`tracing_error::ErrorLayer`].
///
/// A second call leaves the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let output = match environment {
        Environment::Production => fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed(),
        Environment::Development => fmt::layer().pretty().with_file(false).boxed(),
    };

    let installed = tracing_subscriber::registry()
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!(?environment, "Tracing initialized");
    } else {
        debug!("Tracing already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for environment in [Environment::Development, Environment::Production] {
            let directives = default_directives(&environment);
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn test_production_is_quieter_than_development() {
        assert_eq!(default_directives(&Environment::Production), "info");
        assert!(default_directives(&Environment::Development).starts_with("debug"));
    }

    #[test]
    fn test_init_tracing_twice_keeps_running() {
        init_tracing(&Environment::Development);
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Production);
        });
    }

    #[test]
    fn test_install_color_eyre_is_idempotent() {
        install_color_eyre();
        install_color_eyre();
    }
}
