//! An async client for a Redis gateway's string API
//!
//! This library translates typed method calls into REST requests against a
//! Redis-backed key-value gateway and decodes the JSON responses. There is
//! no engine underneath: every operation is one HTTP round trip.
//!
//! # Features
//! - Typed string operations: get, set (with optional TTL), delete, info,
//!   batch get, batch set
//! - Async/await API using tokio and hyper
//! - Static header injection and an optional per-request timeout
//! - One error kind: every failure surfaces as [`RequestError`]
//! - `http://` and `https://` base URLs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use redis_gateway_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), redis_gateway_client::RequestError> {
//!     let client = Client::new("http://localhost:8080");
//!     let strings = client.string();
//!
//!     // Store a value with a one-hour TTL
//!     strings.set("greeting", "hello", Some(3600)).await?;
//!
//!     // Read it back
//!     let value = strings.get("greeting").await?;
//!     println!("greeting = {:?}", value);
//!
//!     // Remove it
//!     let deleted = strings.delete("greeting").await?;
//!     println!("deleted: {}", deleted);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod string;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::{RequestError, Result};
pub use string::StringClient;
pub use transport::{ClientConfig, Transport};
pub use types::*;
