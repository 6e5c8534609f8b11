use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingSettings;

/// Initialize the tracing subscriber with structured logging.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// crate and `info` to everything else.
pub fn init_tracing(logging: &LoggingSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,keyspot={}", logging.level)));

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    tracing::info!(json = logging.json, level = %logging.level, "Logging initialized");
}
