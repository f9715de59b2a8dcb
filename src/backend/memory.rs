//! # In-Memory Backend
//!
//! A [`SecretsManagerApi`] that keeps secrets in a process-local map.
//!
//! Behaves like AWS Secrets Manager for the four operations the client uses:
//! creating an existing name fails, reading/updating/deleting a missing name
//! fails, and every write mints a fresh version id. Deletion is immediate.
//!
//! This is ephemeral - data does not persist across restarts.
//! Thread-safe using `Arc<RwLock>` for concurrent access.

use super::{
    CreateSecretRequest, CreateSecretResponse, DeleteSecretRequest, DeleteSecretResponse,
    GetSecretValueRequest, GetSecretValueResponse, SecretWriteResponse, SecretsManagerApi,
    UpdateSecretRequest, UpdateSecretResponse,
};
use crate::constants::{MEMORY_BACKEND_ACCOUNT_ID, MEMORY_BACKEND_REGION, MEMORY_PROVIDER};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Errors raised by [`InMemorySecretsManager`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryBackendError {
    #[error("secret {name} not found")]
    NotFound { name: String },

    #[error("secret {name} already exists")]
    AlreadyExists { name: String },
}

impl MemoryBackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone)]
struct StoredSecret {
    arn: String,
    version_id: String,
    secret_binary: Option<Vec<u8>>,
}

/// Number of calls made to each operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub create: usize,
    pub get: usize,
    pub update: usize,
    pub delete: usize,
}

#[derive(Debug, Default)]
struct Counters {
    create: AtomicUsize,
    get: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

/// In-memory secret store keyed by secret name
#[derive(Clone, Debug, Default)]
pub struct InMemorySecretsManager {
    store: Arc<RwLock<HashMap<String, StoredSecret>>>,
    counters: Arc<Counters>,
}

impl InMemorySecretsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a secret that has no binary payload
    ///
    /// Mirrors a string-only secret created outside this crate.
    pub async fn insert_without_binary(&self, name: &str) {
        let stored = StoredSecret {
            arn: arn_for(name),
            version_id: Uuid::new_v4().to_string(),
            secret_binary: None,
        };
        self.store.write().await.insert(name.to_string(), stored);
    }

    /// Raw bytes currently stored under `name`
    pub async fn raw(&self, name: &str) -> Option<Vec<u8>> {
        self.store
            .read()
            .await
            .get(name)
            .and_then(|s| s.secret_binary.clone())
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.store.read().await.contains_key(name)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub fn call_counts(&self) -> CallCounts {
        CallCounts {
            create: self.counters.create.load(Ordering::Relaxed),
            get: self.counters.get.load(Ordering::Relaxed),
            update: self.counters.update.load(Ordering::Relaxed),
            delete: self.counters.delete.load(Ordering::Relaxed),
        }
    }
}

fn arn_for(name: &str) -> String {
    format!(
        "arn:aws:secretsmanager:{MEMORY_BACKEND_REGION}:{MEMORY_BACKEND_ACCOUNT_ID}:secret:{name}"
    )
}

#[async_trait]
impl SecretsManagerApi for InMemorySecretsManager {
    type Error = MemoryBackendError;

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<CreateSecretResponse, Self::Error> {
        self.counters.create.fetch_add(1, Ordering::Relaxed);
        let mut store = self.store.write().await;
        if store.contains_key(&request.name) {
            return Err(MemoryBackendError::AlreadyExists { name: request.name });
        }

        let stored = StoredSecret {
            arn: arn_for(&request.name),
            version_id: Uuid::new_v4().to_string(),
            secret_binary: Some(request.secret_binary),
        };
        let response = SecretWriteResponse {
            arn: Some(stored.arn.clone()),
            name: Some(request.name.clone()),
            version_id: Some(stored.version_id.clone()),
        };
        debug!(provider = MEMORY_PROVIDER, secret_name = %request.name, "Created secret");
        store.insert(request.name, stored);
        Ok(response)
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, Self::Error> {
        self.counters.get.fetch_add(1, Ordering::Relaxed);
        let store = self.store.read().await;
        let stored = store
            .get(&request.secret_id)
            .ok_or_else(|| MemoryBackendError::NotFound {
                name: request.secret_id.clone(),
            })?;

        Ok(GetSecretValueResponse {
            arn: Some(stored.arn.clone()),
            name: Some(request.secret_id.clone()),
            version_id: Some(stored.version_id.clone()),
            secret_binary: stored.secret_binary.clone(),
        })
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<UpdateSecretResponse, Self::Error> {
        self.counters.update.fetch_add(1, Ordering::Relaxed);
        let mut store = self.store.write().await;
        let stored = store
            .get_mut(&request.secret_id)
            .ok_or_else(|| MemoryBackendError::NotFound {
                name: request.secret_id.clone(),
            })?;

        stored.version_id = Uuid::new_v4().to_string();
        stored.secret_binary = Some(request.secret_binary);
        debug!(provider = MEMORY_PROVIDER, secret_name = %request.secret_id, "Updated secret");

        Ok(SecretWriteResponse {
            arn: Some(stored.arn.clone()),
            name: Some(request.secret_id),
            version_id: Some(stored.version_id.clone()),
        })
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, Self::Error> {
        self.counters.delete.fetch_add(1, Ordering::Relaxed);
        let removed = self
            .store
            .write()
            .await
            .remove(&request.secret_id)
            .ok_or_else(|| MemoryBackendError::NotFound {
                name: request.secret_id.clone(),
            })?;
        debug!(provider = MEMORY_PROVIDER, secret_name = %request.secret_id, "Deleted secret");

        Ok(DeleteSecretResponse {
            arn: Some(removed.arn),
            name: Some(request.secret_id),
            deletion_date: Some(chrono::Utc::now().timestamp()),
        })
    }
}
