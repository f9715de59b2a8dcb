//! # Backend API
//!
//! The remote operations a secret-management backend must offer.
//!
//! [`SecretsManagerApi`] carries exactly the four calls the client needs, so
//! a test double can stand in for the real service without any network.
//! Implementations:
//! - [`AwsSecretsManager`](crate::provider::aws::AwsSecretsManager) - AWS Secrets Manager via the official SDK
//! - [`InMemorySecretsManager`](memory::InMemorySecretsManager) - process-local map

use async_trait::async_trait;

pub mod memory;

pub use memory::{InMemorySecretsManager, MemoryBackendError};

/// Request to create a new secret holding a binary payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSecretRequest {
    pub name: String,
    pub secret_binary: Vec<u8>,
}

/// Request to read the current value of a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSecretValueRequest {
    pub secret_id: String,
}

/// Request to replace the value of an existing secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSecretRequest {
    pub secret_id: String,
    pub secret_binary: Vec<u8>,
}

/// Request to delete a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSecretRequest {
    pub secret_id: String,
}

/// Metadata returned by create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretWriteResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
}

pub type CreateSecretResponse = SecretWriteResponse;
pub type UpdateSecretResponse = SecretWriteResponse;

/// Result of a read call
///
/// `secret_binary` is `None` when the backend holds the secret but has no
/// binary payload for it (for example a string-only secret).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GetSecretValueResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
    pub secret_binary: Option<Vec<u8>>,
}

impl std::fmt::Debug for GetSecretValueResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetSecretValueResponse")
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("version_id", &self.version_id)
            .field(
                "secret_binary",
                &self.secret_binary.as_ref().map(|b| format!("<{} bytes>", b.len())),
            )
            .finish()
    }
}

/// Result of a delete call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSecretResponse {
    pub arn: Option<String>,
    pub name: Option<String>,
    /// When the backend will purge the secret (seconds since the Unix epoch)
    pub deletion_date: Option<i64>,
}

/// The four remote operations of a secret-management backend
///
/// Errors are the backend's own type and reach the caller untouched, so the
/// backend alone decides what "not found" or "access denied" look like.
#[async_trait]
pub trait SecretsManagerApi: Send + Sync {
    /// Error raised by any of the remote calls
    type Error: std::error::Error + Send + Sync + 'static;

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<CreateSecretResponse, Self::Error>;

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, Self::Error>;

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<UpdateSecretResponse, Self::Error>;

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, Self::Error>;
}
