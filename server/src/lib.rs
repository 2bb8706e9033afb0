//! Backend for the hello_world demo API.
//!
//! # Design
//! Two stateless endpoints under `/api/hello_world`. Every body travels with
//! transport status 200 and carries an advisory `status_code` field, and a
//! POST without a `name` key answers with an `error` field instead of
//! `message`. `app()` exposes the bare `Router` so tests can drive it
//! in-process; `run()` serves it on a provided listener.
//!
//! Handlers are instrumented tracing spans with a per-request id.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Response body shared by both greeting endpoints.
///
/// Exactly one of `message` / `error` is present. `status_code` is advisory:
/// it reports the outcome without changing the transport status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HelloWorldResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status_code: u16,
}

impl HelloWorldResponse {
    fn greeting(message: String) -> Self {
        Self {
            message: Some(message),
            error: None,
            status_code: 200,
        }
    }

    fn bad_request(error: &str) -> Self {
        Self {
            message: None,
            error: Some(error.to_string()),
            status_code: 400,
        }
    }
}

/// POST body. `name` is optional so that a present-but-empty name and a
/// missing key can be told apart: only the latter draws the error body.
#[derive(Debug, Deserialize)]
pub struct PostHelloWorld {
    pub name: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/hello_world/get_hello_world", get(get_hello_world))
        .route("/api/hello_world/post_hello_world", post(post_hello_world))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[tracing::instrument(fields(request_id = %Uuid::new_v4()))]
async fn get_hello_world() -> Json<HelloWorldResponse> {
    tracing::info!("greeting requested");
    Json(HelloWorldResponse::greeting("Hello, World!".to_string()))
}

#[tracing::instrument(fields(request_id = %Uuid::new_v4()))]
async fn post_hello_world(Json(input): Json<PostHelloWorld>) -> Json<HelloWorldResponse> {
    match input.name {
        Some(name) => {
            tracing::info!("greeting sent");
            Json(HelloWorldResponse::greeting(format!("Hello, {name}!")))
        }
        None => {
            tracing::info!("request body carried no name");
            Json(HelloWorldResponse::bad_request(
                "Please provide a name in the request body",
            ))
        }
    }
}
