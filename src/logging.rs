//! Tracing subscriber setup

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "weather_advisor={level},tower_http={level},warn",
                level = config.level
            ))
        });

        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        if config.format == "json" {
            builder
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .init();
        } else {
            builder.pretty().with_target(true).init();
        }
    });
}
