//! Error types for the hello_world API client.
//!
//! # Design
//! The taxonomy is flat: the presentation layer collapses every failure
//! into a single display literal per action, so the variants only record
//! where a failure happened. There is no status-code variant: the backend
//! answers even its rejection body with transport status 200, and the
//! client treats the body as the whole contract.

use thiserror::Error;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip failed (refused connection, interrupted read).
    /// Produced by the host executing the request, never by the core.
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
