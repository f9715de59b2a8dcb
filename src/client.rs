//! # Secret Client
//!
//! [`SecretClient`] stores any [`SecretValue`] in any [`SecretsManagerApi`].
//!
//! Each operation makes exactly one backend call with at most one
//! (de)serialization step around it:
//!
//! | operation | payload step            | backend call       |
//! |-----------|-------------------------|--------------------|
//! | create    | `get_data` before       | `create_secret`    |
//! | get       | `set_data` after        | `get_secret_value` |
//! | update    | `get_data` before       | `update_secret`    |
//! | delete    | -                       | `delete_secret`    |
//!
//! Failures are returned immediately: no retries, no existence checks, no
//! rewrapping of backend errors. Cancellation is done by dropping the future;
//! wrap calls in `tokio::time::timeout` to bound them.
//!
//! Bytes read back are wiped once `set_data` has consumed them. Bytes written
//! are moved into the backend request, so wiping them is up to the backend.

use crate::backend::{
    CreateSecretRequest, DeleteSecretRequest, GetSecretValueRequest, SecretsManagerApi,
    UpdateSecretRequest,
};
use crate::error::SecretStoreError;
use crate::value::SecretValue;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};
use zeroize::Zeroize;

/// Typed four-operation contract over secrets of type `T`
///
/// Implemented by [`SecretClient`]; useful as a seam for callers that want
/// to hold `Arc<dyn SecretStore<T, Error = _>>`.
#[async_trait]
pub trait SecretStore<T: SecretValue>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, name: &str) -> Result<T, Self::Error>;

    async fn create(&self, name: &str, value: &T) -> Result<(), Self::Error>;

    async fn update(&self, name: &str, value: &T) -> Result<(), Self::Error>;

    async fn delete(&self, name: &str) -> Result<(), Self::Error>;
}

/// Generic client binding a payload type to a backend
///
/// Holds only a shared handle to the backend, so it is cheap to clone and
/// safe to use from many tasks at once. Consistency between concurrent
/// writers of the same name is whatever the backend provides.
pub struct SecretClient<T, B> {
    backend: Arc<B>,
    _value: PhantomData<fn() -> T>,
}

impl<T, B> Clone for SecretClient<T, B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            _value: PhantomData,
        }
    }
}

impl<T, B: std::fmt::Debug> std::fmt::Debug for SecretClient<T, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretClient")
            .field("value_type", &std::any::type_name::<T>())
            .field("backend", &self.backend)
            .finish()
    }
}

impl<T, B> SecretClient<T, B>
where
    T: SecretValue,
    B: SecretsManagerApi,
{
    pub fn new(backend: B) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    /// Build a client over a backend that is shared with other clients
    pub fn from_shared(backend: Arc<B>) -> Self {
        Self {
            backend,
            _value: PhantomData,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Store `value` under a new secret `name`
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::Serialization`] if `value` cannot be encoded (the
    /// backend is not called), otherwise [`SecretStoreError::Backend`].
    pub async fn create(&self, name: &str, value: &T) -> Result<(), SecretStoreError<B::Error>> {
        let span = info_span!("secret_store.create", secret.name = name);
        async move {
            let secret_binary = value.get_data().map_err(SecretStoreError::Serialization)?;
            debug!(secret_name = name, bytes = secret_binary.len(), "Creating secret");
            self.backend
                .create_secret(CreateSecretRequest {
                    name: name.to_string(),
                    secret_binary,
                })
                .await
                .map_err(SecretStoreError::Backend)?;
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Read secret `name` and decode it into a fresh `T`
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::Backend`] if the read fails,
    /// [`SecretStoreError::EmptyPayload`] if the secret has no binary payload,
    /// [`SecretStoreError::Deserialization`] if `T` rejects the bytes.
    pub async fn get(&self, name: &str) -> Result<T, SecretStoreError<B::Error>> {
        let span = info_span!("secret_store.get", secret.name = name);
        async move {
            let response = self
                .backend
                .get_secret_value(GetSecretValueRequest {
                    secret_id: name.to_string(),
                })
                .await
                .map_err(SecretStoreError::Backend)?;

            let Some(mut secret_binary) = response.secret_binary else {
                return Err(SecretStoreError::EmptyPayload {
                    name: name.to_string(),
                });
            };
            debug!(secret_name = name, bytes = secret_binary.len(), "Fetched secret");

            let mut value = T::default();
            let decoded = value.set_data(&secret_binary);
            secret_binary.zeroize();
            decoded.map_err(|source| SecretStoreError::Deserialization {
                name: name.to_string(),
                source,
            })?;
            Ok(value)
        }
        .instrument(span)
        .await
    }

    /// Replace the payload of secret `name` with `value`
    ///
    /// Whether `name` exists is left to the backend to decide.
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::Serialization`] if `value` cannot be encoded (the
    /// backend is not called), otherwise [`SecretStoreError::Backend`].
    pub async fn update(&self, name: &str, value: &T) -> Result<(), SecretStoreError<B::Error>> {
        let span = info_span!("secret_store.update", secret.name = name);
        async move {
            let secret_binary = value.get_data().map_err(SecretStoreError::Serialization)?;
            debug!(secret_name = name, bytes = secret_binary.len(), "Updating secret");
            self.backend
                .update_secret(UpdateSecretRequest {
                    secret_id: name.to_string(),
                    secret_binary,
                })
                .await
                .map_err(SecretStoreError::Backend)?;
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Delete secret `name`
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::Backend`] if the backend refuses the deletion.
    pub async fn delete(&self, name: &str) -> Result<(), SecretStoreError<B::Error>> {
        let span = info_span!("secret_store.delete", secret.name = name);
        async move {
            self.backend
                .delete_secret(DeleteSecretRequest {
                    secret_id: name.to_string(),
                })
                .await
                .map_err(SecretStoreError::Backend)?;
            debug!(secret_name = name, "Deleted secret");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<T, B> SecretStore<T> for SecretClient<T, B>
where
    T: SecretValue + 'static,
    B: SecretsManagerApi + 'static,
{
    type Error = SecretStoreError<B::Error>;

    async fn get(&self, name: &str) -> Result<T, Self::Error> {
        SecretClient::get(self, name).await
    }

    async fn create(&self, name: &str, value: &T) -> Result<(), Self::Error> {
        SecretClient::create(self, name, value).await
    }

    async fn update(&self, name: &str, value: &T) -> Result<(), Self::Error> {
        SecretClient::update(self, name, value).await
    }

    async fn delete(&self, name: &str) -> Result<(), Self::Error> {
        SecretClient::delete(self, name).await
    }
}
