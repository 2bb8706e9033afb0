//! Wire DTOs for the hello_world API.
//!
//! # Design
//! `Greeting` mirrors only the field the presentation layer consumes. The
//! backend decorates its bodies with an advisory `status_code` (and, for a
//! rejected POST, an `error` string); serde drops those along with any other
//! unknown field. The server crate defines its schema independently;
//! integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// Response body of both greeting endpoints.
///
/// `message` is optional on the wire: an empty object parses successfully,
/// and it is the presentation layer's job to substitute its fallback text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Greeting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request payload for the POST greeting endpoint.
///
/// The name travels as-is; deciding whether an empty name should be sent at
/// all is the caller's concern, not the wire format's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostHelloWorld {
    pub name: String,
}
