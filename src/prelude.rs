//! # Prelude
//!
//! Re-exports commonly used types for convenience.
//!
//! ```rust
//! use secret_store::prelude::*;
//! ```

pub use crate::backend::{InMemorySecretsManager, MemoryBackendError, SecretsManagerApi};
pub use crate::client::{SecretClient, SecretStore};
pub use crate::config::{AwsSecretsManagerConfig, ConfigError};
pub use crate::error::SecretStoreError;
pub use crate::provider::aws::{AwsSecretsManager, DeleteMode};
pub use crate::value::{EnvSecret, PayloadError, SecretValue};
