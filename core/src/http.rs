//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — whichever host embeds the client executes the
//! actual I/O. This keeps the core deterministic: every parse path can be
//! exercised with a hand-written response, including the malformed ones a
//! live server will not produce on demand.

/// HTTP method for a request. Only the two methods the greeting API uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `HelloWorldClient::build_*` methods. The host executes this
/// request against the network and hands back the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `HelloWorldClient::parse_*` methods for deserialization. The status code
/// is carried for the host's benefit; the parse methods read only `body`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
