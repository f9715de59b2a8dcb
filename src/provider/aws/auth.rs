//! # AWS SDK Configuration
//!
//! Builds the shared SDK configuration used by the Secrets Manager client.

use crate::config::AwsSecretsManagerConfig;
use aws_config::SdkConfig;
use tracing::info;

/// Create AWS SDK config using the default credential chain
///
/// Region, endpoint and timeout overrides from `config` are applied on top of
/// what the SDK discovers from the environment.
pub async fn build_sdk_config(config: &AwsSecretsManagerConfig) -> SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        builder = builder.region(aws_config::Region::new(region.clone()));
    }

    // Override API endpoint BEFORE loading; the SDK resolves it during load()
    if let Some(endpoint) = &config.endpoint_url {
        info!(endpoint = %endpoint, "Using custom AWS Secrets Manager endpoint");
        builder = builder.endpoint_url(endpoint);
    }

    if let Some(timeout) = config.operation_timeout {
        builder = builder.timeout_config(
            aws_config::timeout::TimeoutConfig::builder()
                .operation_timeout(timeout)
                .build(),
        );
    }

    builder.load().await
}
