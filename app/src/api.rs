//! Executing surface of the API client.
//!
//! # Design
//! Composes the core's build/parse pairs with the blocking executor into the
//! two operations the page calls. The base URL is resolved exactly once, at
//! construction: `API_BASE_URL` when set, otherwise the address the server
//! binary binds by default. Failures of any kind propagate untouched;
//! mapping them to display text is the page's job.

use hello_core::{ApiError, Greeting, HelloWorldClient, PostHelloWorld};

use crate::transport;

/// Development backend address, used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5328";

/// Blocking client for the two greeting endpoints.
pub struct HelloWorldApi {
    client: HelloWorldClient,
    agent: ureq::Agent,
}

impl HelloWorldApi {
    /// Client bound to an explicit base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: HelloWorldClient::new(base_url),
            agent: transport::agent(),
        }
    }

    /// Client bound to `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// Fetch the fixed greeting.
    pub fn get_hello_world(&self) -> Result<Greeting, ApiError> {
        let req = self.client.build_get_hello_world();
        let response = transport::execute(&self.agent, &req)?;
        self.client.parse_get_hello_world(response)
    }

    /// Submit `name` and fetch the personalized greeting.
    pub fn post_hello_world(&self, name: &str) -> Result<Greeting, ApiError> {
        let input = PostHelloWorld {
            name: name.to_string(),
        };
        let req = self.client.build_post_hello_world(&input)?;
        let response = transport::execute(&self.agent, &req)?;
        self.client.parse_post_hello_world(response)
    }
}
