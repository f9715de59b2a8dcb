//! # AWS Secrets Manager Operations
//!
//! Implements [`SecretsManagerApi`] for [`AwsSecretsManager`].
//!
//! SDK errors are converted into the unified `aws_sdk_secretsmanager::Error`
//! and returned as-is; `ResourceNotFoundException` is how AWS reports a
//! missing secret.

use super::{AwsSecretsManager, DeleteMode};
use crate::backend::{
    CreateSecretRequest, CreateSecretResponse, DeleteSecretRequest, DeleteSecretResponse,
    GetSecretValueRequest, GetSecretValueResponse, SecretWriteResponse, SecretsManagerApi,
    UpdateSecretRequest, UpdateSecretResponse,
};
use crate::constants::AWS_PROVIDER;
use crate::observability::metrics;
use async_trait::async_trait;
use aws_sdk_secretsmanager::primitives::Blob;
use aws_sdk_secretsmanager::Error as AwsError;
use std::time::Instant;
use tracing::field::Empty;
use tracing::{debug, debug_span, info, info_span, warn, Instrument, Span};

/// Record the outcome of an operation on its span and in metrics
fn record_outcome(span: &Span, operation: &'static str, start: Instant, success: bool) {
    let elapsed = start.elapsed();
    span.record("operation.success", success);
    span.record(
        "operation.duration_ms",
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    );
    if success {
        metrics::record_secret_operation(AWS_PROVIDER, operation, elapsed.as_secs_f64());
    } else {
        metrics::increment_provider_operation_errors(AWS_PROVIDER, operation);
    }
}

fn log_failure(operation: &'static str, secret_name: &str, region: Option<&str>, e: &AwsError) {
    if matches!(e, AwsError::ResourceNotFoundException(_)) {
        debug!(
            provider = AWS_PROVIDER,
            region = region.unwrap_or_default(),
            secret_name = secret_name,
            operation = operation,
            "AWS secret {} not found",
            secret_name
        );
    } else {
        warn!(
            provider = AWS_PROVIDER,
            region = region.unwrap_or_default(),
            secret_name = secret_name,
            operation = operation,
            error = %e,
            error_details = ?e,
            "AWS Secrets Manager {} failed: {}",
            operation,
            e
        );
    }
}

#[async_trait]
impl SecretsManagerApi for AwsSecretsManager {
    type Error = AwsError;

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<CreateSecretResponse, Self::Error> {
        let span = info_span!(
            "aws.secret.create",
            secret.name = %request.name,
            region = self.region(),
            operation.success = Empty,
            operation.duration_ms = Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            info!(
                provider = AWS_PROVIDER,
                secret_name = %request.name,
                operation = "create",
                "Creating AWS secret: {}",
                request.name
            );
            let result = self
                .client
                .create_secret()
                .name(&request.name)
                .secret_binary(Blob::new(request.secret_binary))
                .send()
                .await;

            match result {
                Ok(output) => {
                    record_outcome(&span_clone, "create", start, true);
                    Ok(SecretWriteResponse {
                        arn: output.arn().map(ToString::to_string),
                        name: output.name().map(ToString::to_string),
                        version_id: output.version_id().map(ToString::to_string),
                    })
                }
                Err(e) => {
                    let e = AwsError::from(e);
                    record_outcome(&span_clone, "create", start, false);
                    log_failure("create", &request.name, self.region(), &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, Self::Error> {
        let span = debug_span!(
            "aws.secret.get",
            secret.name = %request.secret_id,
            region = self.region(),
            operation.success = Empty,
            operation.duration_ms = Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            let result = self
                .client
                .get_secret_value()
                .secret_id(&request.secret_id)
                .send()
                .await;

            match result {
                Ok(output) => {
                    record_outcome(&span_clone, "get", start, true);
                    let secret_binary = output.secret_binary().map(|blob| blob.as_ref().to_vec());
                    debug!(
                        provider = AWS_PROVIDER,
                        secret_name = %request.secret_id,
                        has_binary = secret_binary.is_some(),
                        "Fetched AWS secret"
                    );
                    Ok(GetSecretValueResponse {
                        arn: output.arn().map(ToString::to_string),
                        name: output.name().map(ToString::to_string),
                        version_id: output.version_id().map(ToString::to_string),
                        secret_binary,
                    })
                }
                Err(e) => {
                    let e = AwsError::from(e);
                    record_outcome(&span_clone, "get", start, false);
                    log_failure("get", &request.secret_id, self.region(), &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<UpdateSecretResponse, Self::Error> {
        let span = info_span!(
            "aws.secret.update",
            secret.name = %request.secret_id,
            region = self.region(),
            operation.success = Empty,
            operation.duration_ms = Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            info!(
                provider = AWS_PROVIDER,
                secret_name = %request.secret_id,
                operation = "update",
                "Updating AWS secret: {}",
                request.secret_id
            );
            // UpdateSecret with a new payload creates a new version labelled AWSCURRENT
            let result = self
                .client
                .update_secret()
                .secret_id(&request.secret_id)
                .secret_binary(Blob::new(request.secret_binary))
                .send()
                .await;

            match result {
                Ok(output) => {
                    record_outcome(&span_clone, "update", start, true);
                    Ok(SecretWriteResponse {
                        arn: output.arn().map(ToString::to_string),
                        name: output.name().map(ToString::to_string),
                        version_id: output.version_id().map(ToString::to_string),
                    })
                }
                Err(e) => {
                    let e = AwsError::from(e);
                    record_outcome(&span_clone, "update", start, false);
                    log_failure("update", &request.secret_id, self.region(), &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, Self::Error> {
        let span = info_span!(
            "aws.secret.delete",
            secret.name = %request.secret_id,
            region = self.region(),
            delete_mode = ?self.delete_mode,
            operation.success = Empty,
            operation.duration_ms = Empty,
        );
        let span_clone = span.clone();
        let start = Instant::now();

        async move {
            info!(
                provider = AWS_PROVIDER,
                secret_name = %request.secret_id,
                operation = "delete",
                "Deleting AWS secret: {}",
                request.secret_id
            );
            let mut delete_request = self.client.delete_secret().secret_id(&request.secret_id);
            match self.delete_mode {
                DeleteMode::BackendDefault => {}
                DeleteMode::RecoveryWindow(days) => {
                    delete_request = delete_request.recovery_window_in_days(days);
                }
                DeleteMode::Force => {
                    delete_request = delete_request.force_delete_without_recovery(true);
                }
            }

            match delete_request.send().await {
                Ok(output) => {
                    record_outcome(&span_clone, "delete", start, true);
                    Ok(DeleteSecretResponse {
                        arn: output.arn().map(ToString::to_string),
                        name: output.name().map(ToString::to_string),
                        deletion_date: output.deletion_date().map(|d| d.secs()),
                    })
                }
                Err(e) => {
                    let e = AwsError::from(e);
                    record_outcome(&span_clone, "delete", start, false);
                    log_failure("delete", &request.secret_id, self.region(), &e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
