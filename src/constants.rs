//! # Constants
//!
//! Shared constants used throughout the crate.
//!
//! These values represent reasonable defaults and can be overridden via
//! environment variables where applicable.

/// Provider label used for AWS Secrets Manager in logs and metrics
pub const AWS_PROVIDER: &str = "aws";

/// Provider label used for the in-memory backend in logs
pub const MEMORY_PROVIDER: &str = "memory";

/// Minimum recovery window AWS accepts for a scheduled deletion (days)
pub const MIN_RECOVERY_WINDOW_DAYS: i64 = 7;

/// Maximum recovery window AWS accepts for a scheduled deletion (days)
pub const MAX_RECOVERY_WINDOW_DAYS: i64 = 30;

/// Log filter for this crate when `RUST_LOG` is unset
///
/// Binaries extend it with their own target via
/// [`crate::observability::log_directive_for`].
pub const DEFAULT_LOG_DIRECTIVE: &str = "secret_store=info";

/// Region used by the in-memory backend when building ARNs
pub const MEMORY_BACKEND_REGION: &str = "local";

/// Account id used by the in-memory backend when building ARNs
pub const MEMORY_BACKEND_ACCOUNT_ID: &str = "000000000000";

/// Environment variable names read by [`crate::config::AwsSecretsManagerConfig::from_env`]
pub mod env {
    pub const REGION: &str = "SECRET_STORE_AWS_REGION";
    pub const ENDPOINT_URL: &str = "SECRET_STORE_ENDPOINT_URL";
    pub const FORCE_DELETE: &str = "SECRET_STORE_FORCE_DELETE";
    pub const RECOVERY_WINDOW_DAYS: &str = "SECRET_STORE_RECOVERY_WINDOW_DAYS";
    pub const OPERATION_TIMEOUT_SECS: &str = "SECRET_STORE_OPERATION_TIMEOUT_SECS";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
