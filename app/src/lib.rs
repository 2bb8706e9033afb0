//! Presentation component for the hello_world demo.
//!
//! # Overview
//! `Page` holds the display state of the two interactions and nothing else;
//! `HelloWorldApi` resolves the backend base URL once from the environment
//! and runs the core's build/parse pairs over a blocking agent. The binary
//! wires both to a line-oriented terminal front end.
//!
//! # Design
//! - The page never sees an error value: every failure is collapsed into a
//!   fixed per-action display literal at the handler boundary.
//! - The two interactions share nothing; a failed request touches only its
//!   own message slot.
//! - Blocking I/O: each user action performs exactly one round-trip and the
//!   front end waits for it.

pub mod api;
pub mod page;
pub mod transport;

pub use api::HelloWorldApi;
pub use page::Page;
