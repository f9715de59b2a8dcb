//! # AWS Secrets Manager Client
//!
//! Backend for AWS Secrets Manager.
//!
//! This module provides functionality to:
//! - Create, read, update and delete secrets with binary payloads
//! - Build the SDK configuration from [`AwsSecretsManagerConfig`]
//! - Point the SDK at a custom endpoint (LocalStack, mock servers)

use crate::config::{AwsSecretsManagerConfig, ConfigError};
use anyhow::{Context, Result};
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::info;

pub mod auth;
mod operations;

/// How `DeleteSecret` is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Let AWS apply its default recovery window
    BackendDefault,
    /// Schedule deletion after the given number of days
    RecoveryWindow(i64),
    /// Delete immediately with no recovery
    Force,
}

impl DeleteMode {
    fn from_config(config: &AwsSecretsManagerConfig) -> Self {
        if config.force_delete_without_recovery {
            Self::Force
        } else if let Some(days) = config.recovery_window_in_days {
            Self::RecoveryWindow(days)
        } else {
            Self::BackendDefault
        }
    }
}

/// AWS Secrets Manager backend implementation
pub struct AwsSecretsManager {
    client: SecretsManagerClient,
    region: Option<String>,
    delete_mode: DeleteMode,
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("region", &self.region)
            .field("delete_mode", &self.delete_mode)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManager {
    /// Create a new AWS Secrets Manager backend
    /// Credentials come from the SDK default chain (env, profile, IRSA, IMDS)
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not pass [`AwsSecretsManagerConfig::validate`].
    pub async fn from_config(config: &AwsSecretsManagerConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid AWS Secrets Manager configuration")?;

        let sdk_config = auth::build_sdk_config(config).await;
        let region = sdk_config.region().map(ToString::to_string);
        info!(
            provider = crate::constants::AWS_PROVIDER,
            region = region.as_deref().unwrap_or("<unset>"),
            "Created AWS Secrets Manager backend"
        );

        Ok(Self {
            client: SecretsManagerClient::new(&sdk_config),
            region,
            delete_mode: DeleteMode::from_config(config),
        })
    }

    /// Wrap an SDK client the caller has already built
    ///
    /// Only the delete options of `config` are used; connection settings
    /// belong to the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the delete options are invalid.
    pub fn from_client(
        client: SecretsManagerClient,
        config: &AwsSecretsManagerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let region = client.config().region().map(ToString::to_string);
        Ok(Self {
            client,
            region,
            delete_mode: DeleteMode::from_config(config),
        })
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The underlying SDK client
    pub fn sdk_client(&self) -> &SecretsManagerClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::config::{BehaviorVersion, Region};

    fn sdk_client() -> SecretsManagerClient {
        let conf = aws_sdk_secretsmanager::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        SecretsManagerClient::from_conf(conf)
    }

    #[test]
    fn test_delete_mode_default() {
        let backend =
            AwsSecretsManager::from_client(sdk_client(), &AwsSecretsManagerConfig::default())
                .unwrap();
        assert_eq!(backend.delete_mode(), DeleteMode::BackendDefault);
        assert_eq!(backend.region(), Some("us-east-1"));
    }

    #[test]
    fn test_delete_mode_force() {
        let config = AwsSecretsManagerConfig::default().with_force_delete(true);
        let backend = AwsSecretsManager::from_client(sdk_client(), &config).unwrap();
        assert_eq!(backend.delete_mode(), DeleteMode::Force);
    }

    #[test]
    fn test_delete_mode_recovery_window() {
        let config = AwsSecretsManagerConfig::default().with_recovery_window_in_days(14);
        let backend = AwsSecretsManager::from_client(sdk_client(), &config).unwrap();
        assert_eq!(backend.delete_mode(), DeleteMode::RecoveryWindow(14));
    }

    #[test]
    fn test_from_client_rejects_invalid_config() {
        let config = AwsSecretsManagerConfig::default().with_recovery_window_in_days(3);
        let err = AwsSecretsManager::from_client(sdk_client(), &config).unwrap_err();
        assert_eq!(err, ConfigError::RecoveryWindowOutOfRange(3));
    }

    #[test]
    fn test_debug_hides_client() {
        let backend =
            AwsSecretsManager::from_client(sdk_client(), &AwsSecretsManagerConfig::default())
                .unwrap();
        let rendered = format!("{backend:?}");
        assert!(rendered.starts_with("AwsSecretsManager"));
        assert!(rendered.contains("us-east-1"));
    }

    #[tokio::test]
    async fn test_from_config_rejects_invalid_config() {
        let config = AwsSecretsManagerConfig::default()
            .with_force_delete(true)
            .with_recovery_window_in_days(7);
        assert!(AwsSecretsManager::from_config(&config).await.is_err());
    }
}
