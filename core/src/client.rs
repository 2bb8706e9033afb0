//! Stateless HTTP request builder and response parser for the hello_world API.
//!
//! # Design
//! `HelloWorldClient` holds only a `base_url` and carries no state between
//! calls. Each endpoint operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the caller executes the actual HTTP round-trip in
//! between. Parsing never inspects the status line: the backend delivers
//! every body, including its advisory rejection body, with transport status
//! 200, so deserialization is the only success criterion.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Greeting, PostHelloWorld};

/// Synchronous, stateless client for the two greeting endpoints.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct HelloWorldClient {
    base_url: String,
}

impl HelloWorldClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get_hello_world(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/hello_world/get_hello_world", self.base_url),
            // Both endpoints speak JSON; the content type travels on GET too.
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_post_hello_world(&self, input: &PostHelloWorld) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/hello_world/post_hello_world", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_get_hello_world(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        parse_greeting(response)
    }

    pub fn parse_post_hello_world(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        parse_greeting(response)
    }
}

/// Both endpoints answer the same body shape; a missing `message` key is a
/// valid response, not an error.
fn parse_greeting(response: HttpResponse) -> Result<Greeting, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HelloWorldClient {
        HelloWorldClient::new("http://localhost:5328")
    }

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_hello_world_produces_correct_request() {
        let req = client().build_get_hello_world();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:5328/api/hello_world/get_hello_world"
        );
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_post_hello_world_produces_correct_request() {
        let input = PostHelloWorld {
            name: "Ann".to_string(),
        };
        let req = client().build_post_hello_world(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.path,
            "http://localhost:5328/api/hello_world/post_hello_world"
        );
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Ann"}));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HelloWorldClient::new("http://localhost:5328/");
        let req = client.build_get_hello_world();
        assert_eq!(
            req.path,
            "http://localhost:5328/api/hello_world/get_hello_world"
        );
    }

    #[test]
    fn parse_get_hello_world_success() {
        let greeting = client()
            .parse_get_hello_world(response(r#"{"message":"Hello, World!","status_code":200}"#))
            .unwrap();
        assert_eq!(greeting.message.as_deref(), Some("Hello, World!"));
    }

    #[test]
    fn parse_empty_object_yields_no_message() {
        let greeting = client().parse_get_hello_world(response("{}")).unwrap();
        assert!(greeting.message.is_none());
    }

    #[test]
    fn parse_preserves_empty_message() {
        // The client hands the body over verbatim; substituting display
        // text for a blank message is the presentation layer's call.
        let greeting = client()
            .parse_get_hello_world(response(r#"{"message":""}"#))
            .unwrap();
        assert_eq!(greeting.message.as_deref(), Some(""));
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let body = r#"{"message":"hi","status_code":200,"extra":[1,2,3]}"#;
        let greeting = client().parse_post_hello_world(response(body)).unwrap();
        assert_eq!(greeting.message.as_deref(), Some("hi"));
    }

    #[test]
    fn parse_rejection_body_yields_no_message() {
        // The backend's no-name rejection carries `error` instead of
        // `message`; the client sees it as a message-less greeting.
        let body = r#"{"error":"Please provide a name in the request body","status_code":400}"#;
        let greeting = client().parse_post_hello_world(response(body)).unwrap();
        assert!(greeting.message.is_none());
    }

    #[test]
    fn parse_bad_json_fails() {
        let err = client()
            .parse_get_hello_world(response("not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_empty_body_fails() {
        let err = client().parse_get_hello_world(response("")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_json_null_fails() {
        // A JSON null is not a greeting object; it must surface as a parse
        // failure rather than an empty greeting.
        let err = client().parse_get_hello_world(response("null")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_non_object_body_fails() {
        let err = client()
            .parse_post_hello_world(response(r#"["message"]"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_status_line_is_ignored() {
        let resp = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: r#"{"message":"still parsed"}"#.to_string(),
        };
        let greeting = client().parse_get_hello_world(resp).unwrap();
        assert_eq!(greeting.message.as_deref(), Some("still parsed"));
    }
}
