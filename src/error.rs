//! # Errors
//!
//! Error type returned by [`SecretClient`](crate::client::SecretClient).
//!
//! Nothing is retried or reinterpreted: payload failures keep their
//! [`PayloadError`] and backend failures are carried through as the backend's
//! own error value.

use crate::value::PayloadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretStoreError<E>
where
    E: std::error::Error + 'static,
{
    /// The payload could not produce its bytes; no backend call was made
    #[error("failed to serialize secret payload")]
    Serialization(#[source] PayloadError),

    /// The bytes read from the backend were rejected by the payload type
    #[error("failed to deserialize secret {name}")]
    Deserialization {
        name: String,
        #[source]
        source: PayloadError,
    },

    /// The backend read succeeded but returned no binary payload
    #[error("secret {name} has no binary payload")]
    EmptyPayload { name: String },

    /// Failure raised by the backend itself
    #[error(transparent)]
    Backend(E),
}

impl<E> SecretStoreError<E>
where
    E: std::error::Error + 'static,
{
    pub fn is_empty_payload(&self) -> bool {
        matches!(self, Self::EmptyPayload { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
    }

    /// The backend's error, if this failure came from the backend
    pub fn backend_error(&self) -> Option<&E> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }

    /// Take ownership of the backend's error, if this failure came from the backend
    pub fn into_backend_error(self) -> Option<E> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }
}
