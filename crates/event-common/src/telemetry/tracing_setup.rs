//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! Pretty output in development, JSON in production (selected through
//! `APP_ENV`), with `RUST_LOG` overriding the level filter.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn json_output() -> bool {
    std::env::var("APP_ENV").is_ok_and(|v| v.eq_ignore_ascii_case("production"))
}

/// Initialize tracing, without failing on double initialization
pub fn try_init_tracing() -> Result<(), TracingError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    if json_output() {
        registry
            .with(fmt::layer().json())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        registry
            .with(fmt::layer().with_file(true).with_line_number(true))
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}
