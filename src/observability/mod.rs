//! # Observability
//!
//! Logging setup and Prometheus metrics.

use crate::constants::{env, DEFAULT_LOG_DIRECTIVE};

pub mod metrics;

/// Default filter for a binary: this crate plus the binary's own target
///
/// Pass `env!("CARGO_CRATE_NAME")` so the binary's own events are not
/// filtered out when `RUST_LOG` is unset.
pub fn log_directive_for(bin_target: &str) -> String {
    format!("{DEFAULT_LOG_DIRECTIVE},{bin_target}=info")
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used.
/// `LOG_FORMAT=json` switches to JSON lines for log shippers.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive.into());

    let json = std::env::var(env::LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
