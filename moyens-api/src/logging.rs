//! Log subscriber setup.
//!
//! `LOG_LEVEL` picks the filter, `LOG_PRETTY=true` switches from JSON lines
//! to human-readable output, and `SERVICE_NAME` is carried by a root span
//! so every event emitted under it is tagged with the service.

use tracing::Span;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{StartupError, config::LoggingConfig};

const PRETTY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maps a `LOG_LEVEL` value to a filter directive.
///
/// `fatal` and `panic` have no tracing counterpart and collapse to `error`;
/// anything unrecognised falls back to `info`.
pub fn level_directive(raw: Option<&str>) -> &'static str {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("warn" | "warning") => "warn",
        Some("error" | "fatal" | "panic") => "error",
        _ => "info",
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), StartupError> {
    let filter = EnvFilter::new(level_directive(config.level.as_deref()));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.pretty {
        registry
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::new(PRETTY_TIME_FORMAT.to_string()))
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    };

    installed.map_err(|err| StartupError::Logging(err.to_string()))
}

/// Root span carrying the service name, or a disabled span when none is set.
pub fn service_span(config: &LoggingConfig) -> Span {
    match &config.service_name {
        Some(name) => tracing::info_span!("service", service = %name),
        None => Span::none(),
    }
}
