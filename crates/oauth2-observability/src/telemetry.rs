use oauth2_config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing/logging.
///
/// - Emits structured JSON logs via `tracing_subscriber` unless `json = false`.
/// - `RUST_LOG` takes precedence over the configured level.
/// - Bridges `log` records into `tracing` (`tracing-subscriber`'s default
///   `tracing-log` feature installs the `LogTracer` during `try_init`).
///
/// Calling this more than once (e.g. from several tests) is not an error; the
/// first subscriber stays installed.
pub fn init_telemetry(
    service_name: &str,
    logging: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let formatting_layer = if logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(build_env_filter(&logging.level))
        .with(formatting_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(service = service_name, level = %logging.level, "Logging initialized");
    }

    Ok(())
}

/// `RUST_LOG` if set and valid, otherwise the configured level, otherwise `info`.
pub fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
