//! Secret Store Library
//!
//! A typed client for storing structured secret values in a remote
//! secret-management backend (AWS Secrets Manager).
//!
//! The library binds two pieces together:
//!
//! - [`SecretValue`](value::SecretValue) - a payload type that can serialize
//!   itself to bytes and populate itself from bytes
//! - [`SecretsManagerApi`](backend::SecretsManagerApi) - the four remote
//!   operations of the backend (create, get, update, delete)
//!
//! [`SecretClient`](client::SecretClient) adapts any backend to any payload type.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use secret_store::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = AwsSecretsManagerConfig::from_env();
//! let backend = AwsSecretsManager::from_config(&config).await?;
//! let client: SecretClient<EnvSecret, _> = SecretClient::new(backend);
//!
//! let secret: EnvSecret = [("DATABASE_URL", "postgres://localhost/db")].into_iter().collect();
//! client.create("my-app-env", &secret).await?;
//! let fetched = client.get("my-app-env").await?;
//! assert_eq!(fetched.get("DATABASE_URL"), Some("postgres://localhost/db"));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod value;
