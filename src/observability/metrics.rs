//! # Metrics
//!
//! Prometheus metrics for backend operations.
//!
//! ## Metrics Exposed
//!
//! - `secret_store_provider_operations_total` - Total number of backend operations
//! - `secret_store_provider_operation_errors_total` - Total number of failed backend operations
//! - `secret_store_provider_operation_duration_seconds` - Duration of backend operations
//!
//! All three are labelled by `provider` and `operation`.

use anyhow::Result;
use prometheus::{Encoder, HistogramVec, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static PROVIDER_OPERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_store_provider_operations_total",
            "Total number of provider operations by provider and operation",
        ),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATIONS_TOTAL metric - this should never happen")
});

static PROVIDER_OPERATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_store_provider_operation_errors_total",
            "Total number of provider operation errors by provider and operation",
        ),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATION_ERRORS_TOTAL metric - this should never happen")
});

static PROVIDER_OPERATION_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "secret_store_provider_operation_duration_seconds",
            "Duration of provider operations in seconds by provider and operation",
        )
        .buckets(vec![0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["provider", "operation"],
    )
    .expect("Failed to create PROVIDER_OPERATION_DURATION metric - this should never happen")
});

/// Register all metrics with the crate registry
///
/// # Errors
///
/// Fails when a metric is already registered.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(PROVIDER_OPERATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PROVIDER_OPERATION_DURATION.clone()))?;
    Ok(())
}

/// Render the registry in the Prometheus text exposition format
///
/// # Errors
///
/// Fails when encoding fails or the output is not UTF-8.
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn record_secret_operation(provider: &str, operation: &str, duration: f64) {
    PROVIDER_OPERATIONS_TOTAL
        .with_label_values(&[provider, operation])
        .inc();
    PROVIDER_OPERATION_DURATION
        .with_label_values(&[provider, operation])
        .observe(duration);
}

pub fn increment_provider_operation_errors(provider: &str, operation: &str) {
    PROVIDER_OPERATION_ERRORS_TOTAL
        .with_label_values(&[provider, operation])
        .inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics() {
        // This should not panic - metrics should register successfully
        assert!(register_metrics().is_ok());
        let text = gather_text().unwrap();
        assert!(text.is_empty() || text.contains("secret_store_"));
    }

    #[test]
    fn test_record_secret_operation() {
        let before = PROVIDER_OPERATIONS_TOTAL
            .with_label_values(&["test", "create"])
            .get();
        record_secret_operation("test", "create", 0.25);
        let after = PROVIDER_OPERATIONS_TOTAL
            .with_label_values(&["test", "create"])
            .get();
        assert_eq!(after, before + 1u64);
    }

    #[test]
    fn test_increment_provider_operation_errors() {
        let before = PROVIDER_OPERATION_ERRORS_TOTAL
            .with_label_values(&["test", "get"])
            .get();
        increment_provider_operation_errors("test", "get");
        let after = PROVIDER_OPERATION_ERRORS_TOTAL
            .with_label_values(&["test", "get"])
            .get();
        assert_eq!(after, before + 1u64);
    }
}
