use tracing_subscriber::EnvFilter;

use tally_core::config::ObservabilityConfig;

/// Build the level filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which is not an error.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(config));
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
