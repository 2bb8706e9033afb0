//! Blocking executor for core-built requests.
//!
//! # Design
//! The core hands over `HttpRequest` values as plain data; this module is
//! the host side of that bargain. ureq's status-as-error behavior is
//! disabled so 4xx/5xx responses come back as data: the client treats the
//! body as the whole contract and never inspects the status line. The only
//! errors produced here are transport-level ones, a refused connection or
//! an interrupted read.

use hello_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

/// Agent configured for the client's body-only contract.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Copy a request's declared headers onto the ureq builder.
fn apply_headers<B>(
    mut request: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }
    request
}

/// Execute an `HttpRequest` over `agent` and return the response as plain
/// data for the core to parse. The request's declared headers go out as-is.
pub fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let call = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => apply_headers(agent.get(&req.path), &req.headers).call(),
        (HttpMethod::Post, Some(body)) => {
            apply_headers(agent.post(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => apply_headers(agent.post(&req.path), &req.headers).send_empty(),
    };

    let mut response = call.map_err(|e| ApiError::TransportError(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::TransportError(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
