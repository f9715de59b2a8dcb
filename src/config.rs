//! # Configuration
//!
//! Settings for reaching AWS Secrets Manager, loaded from environment variables.
//!
//! Credentials are never read here; the AWS SDK default credential chain
//! (environment, profile, IRSA, instance metadata) supplies them.

use crate::constants::{env, MAX_RECOVERY_WINDOW_DAYS, MIN_RECOVERY_WINDOW_DAYS};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("force delete and a recovery window cannot both be set")]
    ConflictingDeleteOptions,

    #[error("recovery window must be between 7 and 30 days, got {0}")]
    RecoveryWindowOutOfRange(i64),

    #[error("operation timeout must be greater than zero")]
    ZeroOperationTimeout,
}

/// AWS Secrets Manager connection settings
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSecretsManagerConfig {
    /// AWS region
    /// Falls back to the SDK region chain (`AWS_REGION`, profile) when unset
    pub region: Option<String>,
    /// Endpoint override
    /// Points the SDK at LocalStack or a mock server instead of AWS
    pub endpoint_url: Option<String>,
    /// Delete secrets immediately instead of scheduling deletion
    pub force_delete_without_recovery: bool,
    /// Recovery window for scheduled deletion (days)
    /// AWS applies its own default (30 days) when unset
    pub recovery_window_in_days: Option<i64>,
    /// Upper bound for a single SDK operation, including SDK-level retries
    pub operation_timeout: Option<Duration>,
}

impl AwsSecretsManagerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            region: env_var_opt(env::REGION),
            endpoint_url: env_var_opt(env::ENDPOINT_URL),
            force_delete_without_recovery: env_var_or_default_bool(env::FORCE_DELETE, false),
            recovery_window_in_days: env_var_parse_opt(env::RECOVERY_WINDOW_DAYS),
            operation_timeout: env_var_parse_opt::<u64>(env::OPERATION_TIMEOUT_SECS)
                .map(Duration::from_secs),
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    #[must_use]
    pub fn with_force_delete(mut self, force: bool) -> Self {
        self.force_delete_without_recovery = force;
        self
    }

    #[must_use]
    pub fn with_recovery_window_in_days(mut self, days: i64) -> Self {
        self.recovery_window_in_days = Some(days);
        self
    }

    #[must_use]
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Check the settings against what AWS accepts
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for conflicting or out-of-range delete options
    /// and for a zero operation timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(days) = self.recovery_window_in_days {
            if self.force_delete_without_recovery {
                return Err(ConfigError::ConflictingDeleteOptions);
            }
            if !(MIN_RECOVERY_WINDOW_DAYS..=MAX_RECOVERY_WINDOW_DAYS).contains(&days) {
                return Err(ConfigError::RecoveryWindowOutOfRange(days));
            }
        }
        if self.operation_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroOperationTimeout);
        }
        Ok(())
    }
}

/// Read environment variable, treating empty values as unset
fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse environment variable, ignoring values that fail to parse
fn env_var_parse_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_var_opt(key).and_then(|v| v.trim().parse().ok())
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AwsSecretsManagerConfig::default();
        assert!(config.region.is_none());
        assert!(!config.force_delete_without_recovery);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_methods() {
        let config = AwsSecretsManagerConfig::default()
            .with_region("eu-west-1")
            .with_endpoint_url("http://localhost:4566")
            .with_recovery_window_in_days(7)
            .with_operation_timeout(Duration::from_secs(5));

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.recovery_window_in_days, Some(7));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_force_delete_conflicts_with_recovery_window() {
        let config = AwsSecretsManagerConfig::default()
            .with_force_delete(true)
            .with_recovery_window_in_days(10);
        assert_eq!(config.validate(), Err(ConfigError::ConflictingDeleteOptions));
    }

    #[test]
    fn test_recovery_window_range() {
        for days in [6, 31, 0, -1] {
            let config = AwsSecretsManagerConfig::default().with_recovery_window_in_days(days);
            assert_eq!(
                config.validate(),
                Err(ConfigError::RecoveryWindowOutOfRange(days)),
                "{days} days should be rejected"
            );
        }
        for days in [7, 30] {
            let config = AwsSecretsManagerConfig::default().with_recovery_window_in_days(days);
            assert_eq!(config.validate(), Ok(()), "{days} days should be accepted");
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AwsSecretsManagerConfig::default().with_operation_timeout(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroOperationTimeout));
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables
        std::env::set_var(env::REGION, "us-west-2");
        std::env::set_var(env::ENDPOINT_URL, "  ");
        std::env::set_var(env::FORCE_DELETE, "Yes");
        std::env::set_var(env::RECOVERY_WINDOW_DAYS, "not-a-number");
        std::env::set_var(env::OPERATION_TIMEOUT_SECS, "15");

        let config = AwsSecretsManagerConfig::from_env();

        std::env::remove_var(env::REGION);
        std::env::remove_var(env::ENDPOINT_URL);
        std::env::remove_var(env::FORCE_DELETE);
        std::env::remove_var(env::RECOVERY_WINDOW_DAYS);
        std::env::remove_var(env::OPERATION_TIMEOUT_SECS);

        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(config.endpoint_url.is_none());
        assert!(config.force_delete_without_recovery);
        assert!(config.recovery_window_in_days.is_none());
        assert_eq!(config.operation_timeout, Some(Duration::from_secs(15)));
    }
}
