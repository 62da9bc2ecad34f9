//! Tracing subscriber setup

use songbook_shared_config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Crates whose events follow `LOG_LEVEL`
const LOG_TARGETS: [&str; 3] = ["songbook_api", "songbook_details_client", "tower_http"];

/// Filter directive used when `RUST_LOG` is not set
///
/// Unknown levels fall back to [`DEFAULT_LOG_LEVEL`].
pub fn default_directive(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    let level = if KNOWN_LEVELS.contains(&level.as_str()) {
        level
    } else {
        DEFAULT_LOG_LEVEL.to_string()
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global fmt subscriber; must be called once, from `main`
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
