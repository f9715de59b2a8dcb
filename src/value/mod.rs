//! # Secret Values
//!
//! The capability a payload type must provide to be stored by a
//! [`SecretClient`](crate::client::SecretClient).
//!
//! A secret value knows how to turn itself into bytes ([`SecretValue::get_data`])
//! and how to overwrite its own state from bytes ([`SecretValue::set_data`]).
//! Reads start from `T::default()` and apply the stored bytes, so every
//! implementation must accept exactly what its `get_data` produces.

use thiserror::Error;

pub mod env;

pub use env::EnvSecret;

/// Errors raised by a payload while encoding or decoding itself
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The value could not be encoded to bytes
    #[error("failed to encode secret payload")]
    Encode(#[source] serde_json::Error),

    /// The bytes could not be decoded into the value's shape
    #[error("failed to decode secret payload")]
    Decode(#[source] serde_json::Error),

    /// The bytes decoded but the value rejected them
    #[error("invalid secret payload: {reason}")]
    Invalid {
        /// Why the payload was rejected
        reason: String,
    },
}

impl PayloadError {
    /// Build an [`PayloadError::Invalid`] from any displayable reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// A payload type that can be stored as a secret
///
/// Round-trip law: for any value `v`, applying `v.get_data()` to
/// `Self::default()` via `set_data` yields a value observably equal to `v`.
/// The client relies on this but does not check it.
pub trait SecretValue: Default + Send + Sync {
    /// Produce the byte representation of the current state
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the value cannot be encoded.
    fn get_data(&self) -> Result<Vec<u8>, PayloadError>;

    /// Replace the current state with the one encoded in `data`
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when `data` is malformed or fails validation.
    fn set_data(&mut self, data: &[u8]) -> Result<(), PayloadError>;
}
