// * Telemetry - line-oriented logging to stdout
// * Text is the default; JSON matches what log collectors ingest directly

use crate::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "ym_provision=info,info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes the tracing subscriber with human-readable lines on stdout
///
/// # Example
/// ```ignore
/// use ym_provision::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(index = 0, "Processing record");
/// ```
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(false).with_writer(std::io::stdout))
        .init();
}

/// Initializes the tracing subscriber with JSON lines on stdout
pub fn init_tracing_json() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .json()
                .with_target(false)
                .with_writer(std::io::stdout),
        )
        .init();
}

pub fn init_tracing_with_format(format: LogFormat) {
    match format {
        LogFormat::Text => init_tracing(),
        LogFormat::Json => init_tracing_json(),
    }
}
