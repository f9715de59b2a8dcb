//! Common test utilities for client tests
//!
//! Provides a backend that records every request it receives, and payload
//! types whose encoding can be made to fail on demand.

#![allow(dead_code, reason = "Not every test binary uses every helper")]

use async_trait::async_trait;
use secret_store::backend::{
    CreateSecretRequest, CreateSecretResponse, DeleteSecretRequest, DeleteSecretResponse,
    GetSecretValueRequest, GetSecretValueResponse, SecretsManagerApi, UpdateSecretRequest,
    UpdateSecretResponse,
};
use secret_store::value::{PayloadError, SecretValue};
use std::sync::{Mutex, Once};
use thiserror::Error;

static TRACING_INIT: Once = Once::new();

/// Install a test tracing subscriber once per test binary
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("secret_store=debug")
            .with_test_writer()
            .try_init();
    });
}

/// A request seen by [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Create(CreateSecretRequest),
    Get(GetSecretValueRequest),
    Update(UpdateSecretRequest),
    Delete(DeleteSecretRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backend unavailable: {0}")]
pub struct BackendUnavailable(pub String);

/// Backend that records requests and answers with canned responses
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<RecordedCall>>,
    /// Payload returned by `get_secret_value`
    pub stored_binary: Option<Vec<u8>>,
    /// When set, every operation fails with this message
    pub fail_with: Option<String>,
}

impl RecordingBackend {
    pub fn returning(binary: Option<Vec<u8>>) -> Self {
        Self {
            stored_binary: binary,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), BackendUnavailable> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(BackendUnavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SecretsManagerApi for RecordingBackend {
    type Error = BackendUnavailable;

    async fn create_secret(
        &self,
        request: CreateSecretRequest,
    ) -> Result<CreateSecretResponse, Self::Error> {
        self.record(RecordedCall::Create(request))?;
        Ok(CreateSecretResponse::default())
    }

    async fn get_secret_value(
        &self,
        request: GetSecretValueRequest,
    ) -> Result<GetSecretValueResponse, Self::Error> {
        self.record(RecordedCall::Get(request))?;
        Ok(GetSecretValueResponse {
            secret_binary: self.stored_binary.clone(),
            ..GetSecretValueResponse::default()
        })
    }

    async fn update_secret(
        &self,
        request: UpdateSecretRequest,
    ) -> Result<UpdateSecretResponse, Self::Error> {
        self.record(RecordedCall::Update(request))?;
        Ok(UpdateSecretResponse::default())
    }

    async fn delete_secret(
        &self,
        request: DeleteSecretRequest,
    ) -> Result<DeleteSecretResponse, Self::Error> {
        self.record(RecordedCall::Delete(request))?;
        Ok(DeleteSecretResponse::default())
    }
}

/// Payload that stores its `value` verbatim and can refuse to encode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub value: String,
    pub fail: bool,
}

impl RawValue {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            fail: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            value: String::new(),
            fail: true,
        }
    }
}

impl SecretValue for RawValue {
    fn get_data(&self) -> Result<Vec<u8>, PayloadError> {
        if self.fail {
            return Err(PayloadError::invalid("fail"));
        }
        Ok(self.value.as_bytes().to_vec())
    }

    fn set_data(&mut self, data: &[u8]) -> Result<(), PayloadError> {
        let value = std::str::from_utf8(data)
            .map_err(|e| PayloadError::invalid(format!("payload is not UTF-8: {e}")))?;
        self.value = value.to_string();
        self.fail = false;
        Ok(())
    }
}
