//! # Provider Modules
//!
//! Concrete backends for remote secret managers.
//!
//! Each provider implements [`SecretsManagerApi`](crate::backend::SecretsManagerApi)
//! and surfaces its SDK's errors unchanged.

pub mod aws;
