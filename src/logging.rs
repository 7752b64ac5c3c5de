//! Logging setup shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Directive used when `RUST_LOG` is unset
pub fn default_directive(level: &str) -> String {
    format!(
        "timeforged_dash={level},tfdash={level},tfdash_serve={level},tower_http={level}",
        level = level
    )
}

/// Install the global subscriber.
///
/// Output goes to stderr so command output on stdout stays clean.
/// `RUST_LOG` takes precedence over `config.level`, which falls back to
/// `default_level`.
pub fn init(config: &LoggingConfig, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.level_or(default_level))));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
