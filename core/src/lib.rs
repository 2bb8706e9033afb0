//! Synchronous API client core for the hello_world demo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the actual
//! HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `HelloWorldClient` is stateless — it holds only `base_url`, which the
//!   host resolves once from its configuration.
//! - Each endpoint operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Parsing reads only the response body; the backend's advisory
//!   `status_code` field and the transport status line are both ignored.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::HelloWorldClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Greeting, PostHelloWorld};
