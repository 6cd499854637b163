//! Logging configuration for the attendance backend
//!
//! Structured logging setup with appropriate levels and formatting.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Initialize the application logging system
///
/// `RUST_LOG` overrides the default filter; `ATS_LOG_FORMAT=json`
/// switches to the JSON layer for production log shipping.
pub fn init_logging() {
    let default_filter = "ats_backend=info,tower_http=info".to_string();
    let filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let json = std::env::var("ATS_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer())
            .init();
    }

    tracing::info!("Logging system initialized");
}

/// JSON logging layer for production
fn json_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

/// Console logging layer for development
fn console_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
}
